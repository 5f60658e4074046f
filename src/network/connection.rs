//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{self, BufReader, BufWriter, Read};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ServerConfig;
use crate::engine::Store;
use crate::error::{NotRedisError, Result};
use crate::protocol::{dispatch, read_request, write_response, Frame, Response};

/// Socket reader that gives up once a deadline passes
///
/// `set_read_timeout` only bounds a single `read` call. Re-applying the
/// remaining time before every call turns it into a deadline for the
/// whole line, however many reads it takes. A zero timeout, or one too
/// large to express as an `Instant`, disables the deadline.
struct DeadlineReader {
    stream: TcpStream,
    deadline: Option<Instant>,
}

impl DeadlineReader {
    fn arm(&mut self, timeout: Duration) {
        self.deadline = effective_timeout(timeout).and_then(|t| Instant::now().checked_add(t));
    }
}

impl Read for DeadlineReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let timeout = match self.deadline {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    return Err(io::Error::new(io::ErrorKind::TimedOut, "idle timeout elapsed"));
                }
                Some(remaining)
            }
            None => None,
        };
        self.stream.set_read_timeout(timeout)?;
        self.stream.read(buf)
    }
}

/// `None` when `timeout` means "never": zero, or past what `Instant` can hold
fn effective_timeout(timeout: Duration) -> Option<Duration> {
    if timeout.is_zero() || Instant::now().checked_add(timeout).is_none() {
        return None;
    }
    Some(timeout)
}

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered, deadline-bounded)
    reader: BufReader<DeadlineReader>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Storage the commands run against
    store: Arc<dyn Store>,

    /// Peer address for logging
    peer_addr: String,

    idle_timeout: Duration,
    max_message_size: usize,
}

impl Connection {
    /// Create a new connection handler
    ///
    /// Sets up buffered I/O and bounds writes by the idle timeout
    pub fn new(stream: TcpStream, store: Arc<dyn Store>, config: &ServerConfig) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        stream.set_write_timeout(effective_timeout(config.idle_timeout))?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(DeadlineReader {
                stream: read_stream,
                deadline: None,
            }),
            writer: BufWriter::new(write_stream),
            store,
            peer_addr,
            idle_timeout: config.idle_timeout,
            max_message_size: config.max_message_size,
        })
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Reads one line per iteration and answers it before reading the next.
    /// Returns when the client disconnects, idles past the timeout, or an
    /// I/O error occurs. Request-level failures never end the loop.
    pub fn handle(&mut self) -> Result<()> {
        tracing::info!(peer = %self.peer_addr, "new client connected");

        loop {
            self.reader.get_mut().arm(self.idle_timeout);

            let response = match read_request(&mut self.reader, self.max_message_size) {
                Ok(Frame::Line(line)) => self.execute(&line),
                Ok(Frame::Oversized) => {
                    tracing::warn!(
                        peer = %self.peer_addr,
                        limit = self.max_message_size,
                        "message too large"
                    );
                    Response::MessageTooLarge
                }
                Err(NotRedisError::InvalidEncoding) => Response::error(&NotRedisError::InvalidEncoding),
                Err(e) if e.is_timeout() => {
                    tracing::info!(peer = %self.peer_addr, "connection timed out");
                    return Ok(());
                }
                Err(e) if e.is_disconnect() => {
                    tracing::debug!(peer = %self.peer_addr, "client disconnected");
                    return Ok(());
                }
                Err(e) => {
                    tracing::error!(peer = %self.peer_addr, error = %e, "failed to read request");
                    return Err(e);
                }
            };

            if let Err(e) = self.send_response(&response) {
                if e.is_disconnect() {
                    tracing::debug!(
                        peer = %self.peer_addr,
                        "client disconnected before response could be sent"
                    );
                    return Ok(());
                }
                tracing::warn!(peer = %self.peer_addr, error = %e, "failed to write response");
                return Err(e);
            }
        }
    }

    /// Parse a line and run it against the store
    fn execute(&self, line: &str) -> Response {
        tracing::trace!(peer = %self.peer_addr, request = line.trim_end(), "received request");
        dispatch(self.store.as_ref(), line)
    }

    /// Send a response to the client
    fn send_response(&mut self, response: &Response) -> Result<()> {
        write_response(&mut self.writer, response)
    }
}
