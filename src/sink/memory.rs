// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Recording sink for tests and programmatic capture.
//!
//! Every protocol call is appended to a shared event log; the provider keeps
//! one record per created sink so callers can assert on destinations,
//! options and the exact call sequence after a run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::core::{ConvertError, Result, SampleValue};

use super::{SeriesSink, SinkOptions, SinkProvider};

/// One recorded protocol call.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    /// `set_time` with the output time
    SetTime(f64),
    /// `put` with the suffixed channel name and payload
    Put {
        /// Suffixed channel name
        channel: String,
        /// Payload
        value: SampleValue,
    },
    /// `close`
    Close,
}

/// Everything one created sink saw.
#[derive(Debug, Clone)]
pub struct SinkRecord {
    /// Destination path the sink was created for
    pub destination: PathBuf,
    /// Options passed at creation
    pub options: SinkOptions,
    /// Shared event log
    pub events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl SinkRecord {
    /// Snapshot of the event log.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

/// In-memory recording sink.
pub struct MemorySink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl MemorySink {
    /// Create a standalone recording sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the event log.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn record(&self, event: SinkEvent) -> Result<()> {
        self.events
            .lock()
            .map_err(|e| ConvertError::sink("memory", format!("event log lock poisoned: {e}")))?
            .push(event);
        Ok(())
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesSink for MemorySink {
    fn set_time(&mut self, time: f64) -> Result<()> {
        self.record(SinkEvent::SetTime(time))
    }

    fn put(&mut self, channel: &str, value: &SampleValue) -> Result<()> {
        self.record(SinkEvent::Put {
            channel: channel.to_string(),
            value: value.clone(),
        })
    }

    fn close(&mut self) -> Result<()> {
        self.record(SinkEvent::Close)
    }
}

/// Provider handing out recording sinks and remembering each creation.
#[derive(Default)]
pub struct MemorySinkProvider {
    records: Mutex<Vec<SinkRecord>>,
}

impl MemorySinkProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records for every sink created so far.
    pub fn records(&self) -> Vec<SinkRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Record for the sink created at `destination`, if any.
    pub fn record_for(&self, destination: &Path) -> Option<SinkRecord> {
        self.records()
            .into_iter()
            .find(|r| r.destination == destination)
    }
}

impl SinkProvider for MemorySinkProvider {
    fn create(&self, destination: &Path, options: &SinkOptions) -> Result<Box<dyn SeriesSink>> {
        let sink = MemorySink::new();
        let record = SinkRecord {
            destination: destination.to_path_buf(),
            options: options.clone(),
            events: Arc::clone(&sink.events),
        };
        self.records
            .lock()
            .map_err(|e| ConvertError::sink("memory", format!("record lock poisoned: {e}")))?
            .push(record);
        Ok(Box::new(sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_call_sequence() {
        let mut sink = MemorySink::new();
        sink.set_time(10.5).unwrap();
        sink.put("chanA.f32", &SampleValue::Float32(3.2)).unwrap();
        sink.put_text("notes.txt", "hello").unwrap();
        sink.close().unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], SinkEvent::SetTime(10.5));
        assert_eq!(
            events[1],
            SinkEvent::Put {
                channel: "chanA.f32".to_string(),
                value: SampleValue::Float32(3.2),
            }
        );
        assert_eq!(
            events[2],
            SinkEvent::Put {
                channel: "notes.txt".to_string(),
                value: SampleValue::Text("hello".to_string()),
            }
        );
        assert_eq!(events[3], SinkEvent::Close);
    }

    #[test]
    fn test_provider_remembers_creations() {
        let provider = MemorySinkProvider::new();
        let opts = SinkOptions {
            pack: true,
            ..SinkOptions::default()
        };
        let mut sink = provider.create(Path::new("CTdata/foo/Foo1"), &opts).unwrap();
        sink.set_time(1.0).unwrap();

        let record = provider.record_for(Path::new("CTdata/foo/Foo1")).unwrap();
        assert!(record.options.pack);
        assert_eq!(record.events(), vec![SinkEvent::SetTime(1.0)]);
        assert!(provider.record_for(Path::new("elsewhere")).is_none());
    }
}
