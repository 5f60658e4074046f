//! TCP Server
//!
//! Accepts connections and dispatches each to its own worker thread.
//!
//! ## Connection lifecycle
//! ```text
//! accept ──► admitted? ──no──► "Too many connections", close
//!               │
//!              yes (slot held by a ConnectionPermit)
//!               │
//!               ▼
//!           Serving ──► closed / timed out / panicked
//!                         (permit dropped, slot released)
//! ```

use std::any::Any;
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crate::config::ServerConfig;
use crate::engine::Store;
use crate::error::Result;
use crate::protocol::{write_response, Response};

use super::{Connection, ConnectionLimiter, ConnectionPermit};

/// TCP server for NotRedis
pub struct Server {
    config: ServerConfig,
    store: Arc<dyn Store>,
    listener: TcpListener,
    limiter: Arc<ConnectionLimiter>,
}

impl Server {
    /// Bind the configured address
    ///
    /// Port 0 picks a free port; see [`Server::local_addr`].
    pub fn bind(config: ServerConfig, store: Arc<dyn Store>) -> Result<Self> {
        let listener = TcpListener::bind(&config.address).map_err(|e| {
            tracing::error!(address = %config.address, error = %e, "failed to start server");
            e
        })?;
        let limiter = ConnectionLimiter::new(config.max_connections);

        Ok(Self {
            config,
            store,
            listener,
            limiter,
        })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Number of connections currently being served
    pub fn active_connections(&self) -> usize {
        self.limiter.active()
    }

    /// Run the accept loop (blocking, never returns on its own)
    ///
    /// Accept failures are logged and skipped.
    pub fn run(&self) -> Result<()> {
        tracing::info!(
            address = %self.local_addr()?,
            max_connections = self.config.max_connections,
            max_message_size = self.config.max_message_size,
            idle_timeout = ?self.config.idle_timeout,
            "server started"
        );

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.admit(stream),
                Err(e) => {
                    tracing::error!(error = %e, "failed to accept connection");
                }
            }
        }

        Ok(())
    }

    /// Admission control: hand the stream to a worker or refuse it
    fn admit(&self, stream: TcpStream) {
        match self.limiter.try_acquire() {
            Some(permit) => self.spawn_worker(stream, permit),
            None => self.reject(stream),
        }
    }

    fn reject(&self, mut stream: TcpStream) {
        tracing::warn!(
            peer = %peer_of(&stream),
            max_connections = self.limiter.max(),
            "connection limit exceeded"
        );

        if let Err(e) = write_response(&mut stream, &Response::TooManyConnections) {
            tracing::debug!(error = %e, "failed to notify refused client");
        }
        let _ = stream.shutdown(Shutdown::Both);
    }

    fn spawn_worker(&self, stream: TcpStream, permit: ConnectionPermit) {
        let peer = peer_of(&stream);
        let store = Arc::clone(&self.store);
        let config = self.config.clone();

        let spawned = thread::Builder::new()
            .name(format!("conn-{}", peer))
            .spawn(move || {
                // Released on every exit path, unwinding included
                let _permit = permit;
                serve(stream, store, &config, &peer);
            });

        if let Err(e) = spawned {
            tracing::error!(error = %e, "failed to spawn connection worker");
        }
    }
}

/// Run one connection behind a panic barrier
fn serve(stream: TcpStream, store: Arc<dyn Store>, config: &ServerConfig, peer: &str) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut connection = Connection::new(stream, store, config)?;
        connection.handle()
    }));

    match outcome {
        Ok(Ok(())) => tracing::debug!(peer, "connection closed"),
        Ok(Err(e)) => tracing::warn!(peer, error = %e, "connection closed with error"),
        Err(payload) => {
            tracing::error!(peer, cause = panic_message(payload.as_ref()), "panic in connection handler")
        }
    }
}

fn peer_of(stream: &TcpStream) -> String {
    stream
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
