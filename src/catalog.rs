//! Line-oriented catalog file I/O.
//!
//! Catalog dumps are plain comma-separated text, one record per line, no
//! header row and no delimiter escaping. This module reads and writes them
//! as raw lines; field access lives in [`crate::record`].

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or writing catalog files.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid catalog: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// A streaming catalog line reader.
///
/// Yields logical lines with the terminator stripped. Unlike a record
/// parser it does not skip blank lines; callers that cap line counts must
/// see the file exactly as it is on disk.
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl LineReader<File> {
    /// Open a catalog file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> LineReader<R> {
    /// Create a reader over any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Create a reader with custom buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Number of the most recently returned line (1-based, 0 before any read).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next logical line, stripping `\n` or `\r\n`.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_line(&mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut line = self.buffer.as_str();
        if let Some(stripped) = line.strip_suffix('\n') {
            line = stripped;
        }
        if let Some(stripped) = line.strip_suffix('\r') {
            line = stripped;
        }
        Ok(Some(line.to_string()))
    }

    /// Get an iterator over all lines.
    pub fn lines(self) -> LineIter<R> {
        LineIter { reader: self }
    }
}

/// Iterator over catalog lines.
pub struct LineIter<R: Read> {
    reader: LineReader<R>,
}

impl<R: Read> Iterator for LineIter<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read at most `limit` lines from a catalog file, in file order.
///
/// Reaching end of input before the cap is not an error; the lines collected
/// so far are returned.
pub fn read_lines<P: AsRef<Path>>(path: P, limit: usize) -> Result<Vec<String>> {
    let mut reader = LineReader::from_path(path)?;
    let mut lines = Vec::new();
    while lines.len() < limit {
        match reader.read_line()? {
            Some(line) => lines.push(line),
            None => break,
        }
    }
    Ok(lines)
}

/// Split a string into lines (useful for testing).
pub fn parse_lines(content: &str) -> Result<Vec<String>> {
    LineReader::new(content.as_bytes()).lines().collect()
}

/// Write lines to a writer, trimming surrounding whitespace from each.
///
/// Stops at the first failed write; no partial-output cleanup is attempted.
pub fn write_lines<W: Write, S: AsRef<str>>(writer: &mut W, lines: &[S]) -> Result<()> {
    for line in lines {
        writeln!(writer, "{}", line.as_ref().trim())?;
    }
    Ok(())
}

/// Create (overwriting) a file at `path` and write `lines` to it, trimmed.
pub fn write_lines_to_path<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, lines)?;
    writer.flush()?;
    Ok(())
}
