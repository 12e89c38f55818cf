//! FileSink - appends resolved gestures to a JSON-lines log

use contracts::{EventRecord, EventSink, PipelineError};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Configuration for FileSink
#[derive(Debug, Clone)]
pub struct FileSinkConfig {
    /// Output file path
    pub path: PathBuf,
}

impl FileSinkConfig {
    /// Create config from params map
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let path = params
            .get("path")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./gestures.jsonl"));

        Self { path }
    }
}

/// One line in the output file
#[derive(Serialize)]
struct FileLine<'a> {
    recorded_at: String,
    seq: u64,
    t: f64,
    gesture: &'a str,
}

/// Sink that appends events to a JSON-lines file
pub struct FileSink {
    name: String,
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    /// Create a new FileSink, appending to the configured path
    pub fn new(name: impl Into<String>, config: FileSinkConfig) -> std::io::Result<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.path)?;

        Ok(Self {
            name: name.into(),
            writer: BufWriter::new(file),
            path: config.path,
        })
    }

    /// Create from params map (for factory)
    pub fn from_params(
        name: impl Into<String>,
        params: &HashMap<String, String>,
    ) -> std::io::Result<Self> {
        let config = FileSinkConfig::from_params(params);
        Self::new(name, config)
    }

    fn append_line(&mut self, record: &EventRecord) -> std::io::Result<()> {
        let line = FileLine {
            recorded_at: chrono::Utc::now().to_rfc3339(),
            seq: record.seq,
            t: record.timestamp,
            gesture: record.event.name(),
        };
        serde_json::to_writer(&mut self.writer, &line)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        self.writer.write_all(b"\n")
    }
}

impl EventSink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "file_sink_write",
        skip(self, record),
        fields(sink = %self.name, seq = record.seq)
    )]
    async fn write(&mut self, record: &EventRecord) -> Result<(), PipelineError> {
        self.append_line(record)
            .map_err(|e| PipelineError::sink_write(&self.name, e.to_string()))
    }

    #[instrument(name = "file_sink_flush", skip(self))]
    async fn flush(&mut self) -> Result<(), PipelineError> {
        self.writer
            .flush()
            .map_err(|e| PipelineError::sink_write(&self.name, e.to_string()))
    }

    #[instrument(name = "file_sink_close", skip(self))]
    async fn close(&mut self) -> Result<(), PipelineError> {
        self.writer
            .flush()
            .map_err(|e| PipelineError::sink_write(&self.name, e.to_string()))?;
        debug!(sink = %self.name, path = %self.path.display(), "FileSink closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::GestureEvent;

    #[tokio::test]
    async fn test_file_sink_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gestures.jsonl");

        let config = FileSinkConfig { path: path.clone() };
        let mut sink = FileSink::new("file", config).unwrap();

        sink.write(&EventRecord::new(0, 0.1, GestureEvent::Left))
            .await
            .unwrap();
        sink.write(&EventRecord::new(1, 0.9, GestureEvent::Forward))
            .await
            .unwrap();
        sink.flush().await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["gesture"], "Left");
        assert_eq!(first["seq"], 0);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["gesture"], "Forward");
    }

    #[tokio::test]
    async fn test_file_sink_from_params_default_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let params =
            HashMap::from([("path".to_string(), path.display().to_string())]);
        let mut sink = FileSink::from_params("file", &params).unwrap();

        sink.write(&EventRecord::new(0, 0.0, GestureEvent::Wave))
            .await
            .unwrap();
        sink.close().await.unwrap();

        assert!(path.exists());
    }
}
