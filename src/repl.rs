//! Line-mode REPL
//!
//! Serves the same protocol as the TCP server, but from an input stream
//! (normally stdin) instead of a socket. A reader thread queues trimmed
//! lines on a bounded channel; a single worker answers them in order.

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::thread;

use crossbeam::channel;

use crate::engine::Store;
use crate::error::Result;
use crate::protocol::dispatch;

/// Lines that may wait for the worker before the reader blocks
pub const QUEUE_CAPACITY: usize = 52;

/// Interactive front end over a store
pub struct Repl {
    store: Arc<dyn Store>,
}

impl Repl {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Answer every line of `input` on `output` until EOF
    ///
    /// Each answer is one line: `OK`, the value, or `Error: <cause>`.
    /// Queued lines are drained before returning.
    pub fn run<R, W>(&self, input: R, output: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write + Send,
    {
        let (tx, rx) = channel::bounded::<String>(QUEUE_CAPACITY);
        let store = self.store.as_ref();

        thread::scope(|scope| {
            let worker = scope.spawn(move || -> Result<()> {
                for line in rx {
                    let response = dispatch(store, &line);
                    writeln!(output, "{}", response.line())?;
                    output.flush()?;
                }
                Ok(())
            });

            let mut read_result: Result<()> = Ok(());
            for line in input.lines() {
                match line {
                    Ok(line) => {
                        // The worker only hangs up after a write failure
                        if tx.send(line.trim().to_string()).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to read input");
                        read_result = Err(e.into());
                        break;
                    }
                }
            }
            drop(tx);

            let worker_result = match worker.join() {
                Ok(result) => result,
                Err(payload) => std::panic::resume_unwind(payload),
            };
            worker_result.and(read_result)
        })
    }
}
