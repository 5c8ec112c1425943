//! Program Loader.
//!
//! This module turns program text into a memory image. It performs:
//! 1. **File Reading:** Reads a program file, separating a missing file from other I/O errors.
//! 2. **Parsing:** One byte per line as a binary literal, with optional `#` comments.
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//!
//! # a comment-only line
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Maximum number of binary digits in one program line.
const MAX_DIGITS: usize = 8;

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the program text.
///
/// # Returns
///
/// The program bytes in load order, `LoadError::NotFound` if the file does
/// not exist, or `LoadError::Parse` for the first malformed line.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::from_io(path, source))?;
    let program = parse_program(&text)?;
    tracing::debug!(path = %path.display(), bytes = program.len(), "program parsed");
    Ok(program)
}

/// Parses program text into bytes.
///
/// Everything after `#` on a line is ignored. Lines that are blank once the
/// comment is removed are skipped; every other line must be 1-8 binary digits.
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let code = line.split('#').next().unwrap_or_default().trim();
        if code.is_empty() {
            continue;
        }
        program.push(parse_byte(code).ok_or_else(|| LoadError::Parse {
            line: idx + 1,
            text: code.to_owned(),
        })?);
    }
    Ok(program)
}

fn parse_byte(code: &str) -> Option<u8> {
    let binary = code.len() <= MAX_DIGITS && code.bytes().all(|b| b == b'0' || b == b'1');
    if binary {
        u8::from_str_radix(code, 2).ok()
    } else {
        None
    }
}
