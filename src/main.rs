//! catskim: extract referentially consistent catalog samples.
//!
//! Usage: catskim <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use catskim::catalog::CatalogError;
use catskim::commands::{
    CheckCommand, ExtractCommand, DEFAULT_OBJECT_LIMIT, DEFAULT_SOURCE_LIMIT,
};

#[derive(Parser)]
#[command(name = "catskim")]
#[command(version)]
#[command(about = "Extract referentially consistent samples from astronomical catalog dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a consistent Object/Source sample and write it out
    Extract {
        /// Object catalog file (field 0 is the object id)
        #[arg(short = 'o', long)]
        objects: PathBuf,

        /// Source catalog file (field 3 references an object id)
        #[arg(short = 's', long)]
        sources: PathBuf,

        /// Maximum number of object rows to read
        #[arg(long, default_value_t = DEFAULT_OBJECT_LIMIT)]
        object_limit: usize,

        /// Maximum number of source rows to read
        #[arg(long, default_value_t = DEFAULT_SOURCE_LIMIT)]
        source_limit: usize,

        /// Directory to write Object.txt and Source.txt into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Print extraction statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Report referential integrity of an Object/Source pair without writing
    Check {
        /// Object catalog file (field 0 is the object id)
        #[arg(short = 'o', long)]
        objects: PathBuf,

        /// Source catalog file (field 3 references an object id)
        #[arg(short = 's', long)]
        sources: PathBuf,

        /// Maximum number of object rows to read
        #[arg(long, default_value_t = DEFAULT_OBJECT_LIMIT)]
        object_limit: usize,

        /// Maximum number of source rows to read
        #[arg(long, default_value_t = DEFAULT_SOURCE_LIMIT)]
        source_limit: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            objects,
            sources,
            object_limit,
            source_limit,
            out_dir,
            stats,
        } => run_extract(objects, sources, object_limit, source_limit, out_dir, stats),

        Commands::Check {
            objects,
            sources,
            object_limit,
            source_limit,
        } => run_check(objects, sources, object_limit, source_limit),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_extract(
    objects: PathBuf,
    sources: PathBuf,
    object_limit: usize,
    source_limit: usize,
    out_dir: PathBuf,
    stats: bool,
) -> Result<(), CatalogError> {
    let cmd = ExtractCommand::new()
        .with_object_limit(object_limit)
        .with_source_limit(source_limit);

    let result = cmd.run(&objects, &sources, &out_dir)?;

    if stats {
        eprintln!("Extract stats: {}", result);
    }

    Ok(())
}

fn run_check(
    objects: PathBuf,
    sources: PathBuf,
    object_limit: usize,
    source_limit: usize,
) -> Result<(), CatalogError> {
    let mut cmd = CheckCommand::new();
    cmd.object_limit = object_limit;
    cmd.source_limit = source_limit;

    let report = cmd.run(&objects, &sources)?;
    println!("{}", report);

    Ok(())
}
