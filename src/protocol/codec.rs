//! Protocol codec
//!
//! Line framing for requests and response encoding.
//!
//! ## Framing
//! A request is every byte up to and including `\n`. The size limit counts
//! the newline. Oversized lines are drained to their newline without being
//! buffered, so a client cannot make the server hold more than
//! `max_size` bytes for one request.

use std::io::{self, BufRead, Write};

use super::Response;
use crate::error::{NotRedisError, Result};

/// One framed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A complete line, newline included
    Line(String),

    /// A line longer than the limit; its bytes were discarded
    Oversized,
}

/// Read one newline-terminated request
///
/// Blocks until a full line arrives. EOF before the newline is reported as
/// `UnexpectedEof`, even if some bytes were read.
pub fn read_request<R: BufRead>(reader: &mut R, max_size: usize) -> Result<Frame> {
    let mut line = Vec::new();
    let mut oversized = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        if available.is_empty() {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }

        let (chunk_len, complete) = match available.iter().position(|&b| b == b'\n') {
            Some(pos) => (pos + 1, true),
            None => (available.len(), false),
        };

        if !oversized {
            if line.len() + chunk_len > max_size {
                oversized = true;
                line = Vec::new();
            } else {
                line.extend_from_slice(&available[..chunk_len]);
            }
        }

        reader.consume(chunk_len);

        if complete {
            break;
        }
    }

    if oversized {
        return Ok(Frame::Oversized);
    }

    String::from_utf8(line)
        .map(Frame::Line)
        .map_err(|_| NotRedisError::InvalidEncoding)
}

/// Write a response line and flush
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    let mut line = response.line();
    line.push('\n');
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(())
}
