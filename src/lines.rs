//! Line reading shared by the parsers.
//!
//! Model output is ASCII in practice, but a truncated or corrupted file may
//! hold stray bytes. Lines are decoded lossily so one bad byte costs at most
//! one row rather than the whole file.

use std::io::{self, BufRead};

/// Streams lines from a reader, reusing one byte buffer
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(256),
        }
    }

    /// Read the next line without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }

        while matches!(self.buffer.last(), Some(b'\n' | b'\r')) {
            self.buffer.pop();
        }

        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }
}

/// Read every line of `reader` into memory
pub fn read_all_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut line_reader = LineReader::new(reader);
    while let Some(line) = line_reader.next_line()? {
        lines.push(line);
    }
    Ok(lines)
}
