pub mod channel;
pub mod config;
pub mod encoding;
pub mod handler;
pub mod hostname;
pub mod metric;
#[cfg(test)]
mod testing;

pub use channel::{Channel, Connect, TcpConnector};
pub use config::KairosdbConfig;
pub use handler::{Handler, KairosdbHandler};
pub use metric::{MetricSample, Tags};

#[macro_use]
extern crate tracing;

/// Basic error type, dynamically dispatched and safe to send across threads
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Basic result type, defined in terms of [`Error`] and generic over `T`
pub type Result<T> = std::result::Result<T, Error>;
