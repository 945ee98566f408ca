use crate::metric::MetricSample;

/// Serialize a sample into one telnet `put` command.
///
/// The produced line is `put <collector>.<metric> <timestamp> <value> <tags> \n`,
/// with a trailing space before the terminator. Tag text without a `host`
/// token gets `host=<local_hostname>` appended so every line is
/// host-attributed.
pub fn encode(sample: &MetricSample, local_hostname: &str) -> String {
    let mut tags = sample.tags.to_string();

    // Containment, not a key lookup: any tag text containing "host"
    // counts as host-attributed already.
    if !tags.contains("host") {
        tags.push_str(" host=");
        tags.push_str(local_hostname);
    }

    format!(
        "put {}.{} {} {} {} \n",
        sample.collector_path, sample.metric_path, sample.timestamp, sample.value, tags
    )
}
