//! Rendering sinks for computed labels

use std::io::Write;

#[cfg(test)]
use mockall::automock;

/// Shown by plain-text sinks when a project lists no versions
pub const EMPTY_PLACEHOLDER: &str = "not specified";

/// Error type for sink operations
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write labels: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize labels: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives the final, ordered list of labels
#[cfg_attr(test, automock)]
pub trait LabelSink {
    fn emit(&mut self, labels: &[String]) -> Result<(), SinkError>;
}

/// Writes one label per line
pub struct PlainSink<W: Write> {
    writer: W,
}

impl<W: Write> PlainSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LabelSink for PlainSink<W> {
    fn emit(&mut self, labels: &[String]) -> Result<(), SinkError> {
        if labels.is_empty() {
            writeln!(self.writer, "{}", EMPTY_PLACEHOLDER)?;
        }
        for label in labels {
            writeln!(self.writer, "{}", label)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the labels as a single JSON array
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LabelSink for JsonSink<W> {
    fn emit(&mut self, labels: &[String]) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, labels)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_sink_writes_one_label_per_line() {
        let mut sink = PlainSink::new(Vec::new());

        sink.emit(&labels(&["1.x", "b1.6-b1.7"])).unwrap();

        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "1.x\nb1.6-b1.7\n"
        );
    }

    #[test]
    fn plain_sink_writes_placeholder_for_empty_list() {
        let mut sink = PlainSink::new(Vec::new());

        sink.emit(&[]).unwrap();

        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "not specified\n"
        );
    }

    #[test]
    fn json_sink_writes_array() {
        let mut sink = JsonSink::new(Vec::new());

        sink.emit(&labels(&["1.1-1.3", "1.4"])).unwrap();

        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "[\"1.1-1.3\",\"1.4\"]\n"
        );
    }

    #[test]
    fn json_sink_writes_empty_array() {
        let mut sink = JsonSink::new(Vec::new());

        sink.emit(&[]).unwrap();

        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "[]\n");
    }
}
