//! Shared utilities for command handlers

use crate::cli::InputSource;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Read};

/// Read the whole input, rejecting anything larger than `max_bytes`
///
/// A limit of 0 disables the check.
pub fn read_input(source: &InputSource, max_bytes: u64) -> Result<Vec<u8>> {
    match source {
        InputSource::Stdin => read_limited(io::stdin().lock(), max_bytes),
        InputSource::File(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::FileNotFound { path: path.clone() },
                _ => Error::Io(e),
            })?;
            read_limited(file, max_bytes)
        }
    }
}

/// Read from `reader` until EOF or until more than `limit` bytes arrive
pub fn read_limited<R: Read>(mut reader: R, limit: u64) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    if limit == 0 {
        reader.read_to_end(&mut buffer)?;
        return Ok(buffer);
    }

    // One byte past the limit is enough to know it was exceeded
    reader.take(limit.saturating_add(1)).read_to_end(&mut buffer)?;
    if buffer.len() as u64 > limit {
        return Err(Error::InputTooLarge { limit });
    }

    Ok(buffer)
}

/// True when the input holds nothing but whitespace
pub fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// Split input into non-blank lines, keeping 1-based line numbers
pub fn document_lines(input: &[u8]) -> Vec<(usize, &[u8])> {
    input
        .split(|&b| b == b'\n')
        .enumerate()
        .filter(|(_, line)| !is_blank(line))
        .map(|(i, line)| (i + 1, line.strip_suffix(b"\r").unwrap_or(line)))
        .collect()
}
