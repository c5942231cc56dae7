//! The `cut` command: feeds arguments or input lines through the truncator.

use std::io::{BufRead, Write};

use crate::error::RunError;
use crate::truncate::{truncate, truncate_bytes};

/// What one unit of width counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Chars,
    Bytes,
}

impl Mode {
    pub const fn from_bytes_flag(bytes: bool) -> Self {
        if bytes {
            Self::Bytes
        } else {
            Self::Chars
        }
    }
}

fn write_cut<W: Write>(out: &mut W, line: &[u8], width: usize, mode: Mode) -> Result<(), RunError> {
    match mode {
        Mode::Bytes => out.write_all(&truncate_bytes(line, width))?,
        Mode::Chars => match std::str::from_utf8(line) {
            Ok(text) => out.write_all(truncate(text, width).as_bytes())?,
            Err(err) => {
                tracing::debug!(%err, "line is not UTF-8, counting bytes");
                out.write_all(&truncate_bytes(line, width))?;
            }
        },
    }
    out.write_all(b"\n")?;
    Ok(())
}

/// Truncate each string and write one result per line.
pub fn cut_texts<W: Write>(out: &mut W, texts: &[String], width: usize, mode: Mode) -> Result<(), RunError> {
    tracing::debug!(count = texts.len(), width, ?mode, "cutting arguments");
    for text in texts {
        write_cut(out, text.as_bytes(), width, mode)?;
    }
    out.flush()?;
    Ok(())
}

/// Truncate each line of `input`. Line terminators (`\n` or `\r\n`) are not
/// counted against the width and are normalized to `\n` on output.
///
/// In [`Mode::Chars`] a line that is not valid UTF-8 is cut by bytes instead.
pub fn cut_lines<R: BufRead, W: Write>(input: R, out: &mut W, width: usize, mode: Mode) -> Result<usize, RunError> {
    let mut count = 0;
    for line in input.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        write_cut(out, &line, width, mode)?;
        count += 1;
    }
    out.flush()?;
    tracing::debug!(lines = count, width, ?mode, "finished cutting input");
    Ok(count)
}
