use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "localhost".into()
}

const fn default_port() -> u16 {
    4242
}

const fn default_timeout() -> u64 {
    15
}

/// Connection settings for the KairosDB telnet write endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KairosdbConfig {
    /// The host to connect to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The telnet API port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Read and write timeout of the underlying socket, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for KairosdbConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout: default_timeout(),
        }
    }
}
