use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use thiserror::Error;

/// Attempts per [`Channel::send`] call, counting reconnects.
pub const RETRY: usize = 3;

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Connect error: {0}")]
    Connect(std::io::Error),
    #[error("Unable to resolve DNS: {0}")]
    Resolve(std::io::Error),
    #[error("No addresses returned.")]
    NoAddresses,
}

/// Builds the transport stream a [`Channel`] writes to.
pub trait Connect {
    type Stream: Write;

    fn connect(&self) -> Result<Self::Stream, ConnectError>;
}

/// Blocking TCP connector with socket-level timeouts.
#[derive(Clone, Debug)]
pub struct TcpConnector {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpConnector {
    pub const fn new(host: String, port: u16, timeout: Duration) -> Self {
        Self {
            host,
            port,
            timeout,
        }
    }
}

impl Connect for TcpConnector {
    type Stream = TcpStream;

    fn connect(&self) -> Result<TcpStream, ConnectError> {
        let addr = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(ConnectError::Resolve)?
            .next()
            .ok_or(ConnectError::NoAddresses)?;

        let stream = TcpStream::connect_timeout(&addr, self.timeout).map_err(ConnectError::Connect)?;

        // The endpoint never writes back, but a read timeout keeps a stalled
        // peer from holding the socket forever.
        stream
            .set_read_timeout(Some(self.timeout))
            .map_err(ConnectError::Connect)?;
        stream
            .set_write_timeout(Some(self.timeout))
            .map_err(ConnectError::Connect)?;

        Ok(stream)
    }
}

/// Delivery channel owning the socket to the ingestion endpoint.
///
/// `send` either writes the line on an established connection or gives up
/// after [`RETRY`] attempts, reconnecting between attempts. Delivery is
/// fire-and-forget: a dropped line is logged, never surfaced to the caller.
pub struct Channel<C: Connect> {
    connector: C,
    stream: Option<C::Stream>,
}

impl<C: Connect> Channel<C> {
    pub const fn new(connector: C) -> Self {
        Self {
            connector,
            stream: None,
        }
    }

    pub const fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Establish the connection. On failure the channel stays disconnected,
    /// the error is only logged.
    pub fn connect(&mut self) {
        match self.connector.connect() {
            Ok(stream) => {
                debug!(message = "Connection established.");

                self.stream = Some(stream);
            }
            Err(err) => {
                error!(message = "Unable to connect.", %err);

                self.close();
            }
        }
    }

    /// Write `line` to the endpoint, reconnecting and retrying on failure.
    ///
    /// Once the retry budget is exhausted the line is dropped silently,
    /// losing a sample is preferable to blocking the collection pipeline.
    pub fn send(&mut self, line: &str) {
        let mut retry = RETRY;

        while retry > 0 {
            match &mut self.stream {
                None => {
                    error!(message = "Socket unavailable.");

                    self.connect();
                }
                Some(stream) => match stream.write_all(line.as_bytes()) {
                    Ok(()) => {
                        debug!(message = "Sent line.", line);

                        return;
                    }
                    Err(err) => {
                        error!(message = "Failed sending data.", %err);

                        self.close();
                    }
                },
            }

            retry -= 1;
        }
    }

    /// Release the socket handle, if any. Idempotent.
    pub fn close(&mut self) {
        self.stream = None;
    }
}

impl<C: Connect> Drop for Channel<C> {
    fn drop(&mut self) {
        self.close();
    }
}
