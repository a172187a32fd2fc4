//! Stdio line protocol
//!
//! The outer boundary of the program: two hex lines in, one result line
//! out. Validation is delegated to the domain constructors; on any
//! violation the computation never runs.

use crate::domain::errors::MultiplyError;
use crate::domain::value_objects::{HexString, OperandPair};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors at the input boundary.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input line: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected two input lines, got {lines_read}")]
    MissingLine { lines_read: usize },

    #[error(transparent)]
    Invalid(#[from] MultiplyError),
}

/// Read exactly two hex lines and build the validated operand pair.
///
/// A single trailing newline (and a preceding carriage return, if any) is
/// stripped from each line; no other whitespace is tolerated.
pub fn read_operand_pair<R: BufRead>(mut reader: R) -> Result<OperandPair, InputError> {
    let a = read_hex_line(&mut reader, 0)?;
    let b = read_hex_line(&mut reader, 1)?;
    Ok(OperandPair::new(a, b)?)
}

fn read_hex_line<R: BufRead>(reader: &mut R, lines_read: usize) -> Result<HexString, InputError> {
    let mut line = String::new();
    let bytes = reader.read_line(&mut line)?;
    if bytes == 0 {
        return Err(InputError::MissingLine { lines_read });
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(HexString::parse(&line)?)
}

/// Write the product followed by a newline. No case folding, no padding.
pub fn write_product<W: Write>(mut writer: W, product: &HexString) -> std::io::Result<()> {
    writeln!(writer, "{product}")
}
