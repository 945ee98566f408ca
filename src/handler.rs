use std::time::Duration;

use crate::channel::{Channel, Connect, TcpConnector};
use crate::config::KairosdbConfig;
use crate::encoding::encode;
use crate::hostname;
use crate::metric::MetricSample;

/// An output adapter, receives each collected sample once.
pub trait Handler {
    fn process(&mut self, sample: &MetricSample);

    /// Release held resources. Called on pipeline shutdown.
    fn close(&mut self) {}
}

/// Forwards samples to KairosDB's telnet `put` API.
///
/// The connection is established eagerly on construction and re-established
/// by the channel as needed. Delivery failures never reach the pipeline.
pub struct KairosdbHandler<C: Connect = TcpConnector> {
    hostname: String,
    channel: Channel<C>,
}

impl KairosdbHandler {
    pub fn new(config: &KairosdbConfig) -> crate::Result<Self> {
        let connector = TcpConnector::new(
            config.host.clone(),
            config.port,
            Duration::from_secs(config.timeout),
        );

        Ok(Self::with_connector(connector, hostname::get()?))
    }
}

impl<C: Connect> KairosdbHandler<C> {
    fn with_connector(connector: C, hostname: String) -> Self {
        let mut channel = Channel::new(connector);
        channel.connect();

        Self { hostname, channel }
    }
}

impl<C: Connect> Handler for KairosdbHandler<C> {
    fn process(&mut self, sample: &MetricSample) {
        let line = encode(sample, &self.hostname);

        self.channel.send(&line);
    }

    fn close(&mut self) {
        self.channel.close();
    }
}
