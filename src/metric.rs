use std::collections::BTreeMap;
use std::fmt;

/// Tags attached to a sample.
///
/// Collector configs historically allowed a pre-rendered tag string next to
/// the usual key/value mapping, so both forms are carried here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tags {
    /// A pre-rendered `k1=v1 k2=v2` token list, passed through untouched.
    Literal(String),

    /// Key/value pairs, rendered in key order.
    Map(BTreeMap<String, String>),
}

impl Default for Tags {
    fn default() -> Self {
        Tags::Map(BTreeMap::new())
    }
}

impl From<BTreeMap<String, String>> for Tags {
    fn from(tags: BTreeMap<String, String>) -> Self {
        Tags::Map(tags)
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tags::Literal(tags) => f.write_str(tags),
            Tags::Map(tags) => {
                for (index, (key, value)) in tags.iter().enumerate() {
                    if index != 0 {
                        f.write_str(" ")?;
                    }

                    write!(f, "{key}={value}")?;
                }

                Ok(())
            }
        }
    }
}

/// A single collected measurement, handed to a handler once and not
/// retained afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricSample {
    /// Dotted path of the producing collector, already stripped of any
    /// pipeline prefixes, e.g. `cpu.total`.
    pub collector_path: String,

    /// Name of the measurement below the collector path, e.g. `idle`.
    pub metric_path: String,

    pub value: f64,

    /// Unix seconds.
    pub timestamp: i64,

    pub tags: Tags,
}
