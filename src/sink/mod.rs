// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Output sink protocol.
//!
//! The time-series sink is an external collaborator: this module defines the
//! call surface the converter drives plus the options it passes through.
//! Buffering, compression, encryption and flush mechanics live behind the
//! [`SeriesSink`] implementation, not here.

pub mod dir;
pub mod memory;

pub use dir::{DirSink, DirSinkProvider};
pub use memory::{MemorySink, MemorySinkProvider, SinkEvent, SinkRecord};

use std::path::{Path, PathBuf};

use crate::core::{Result, SampleValue};

/// Sink-level configuration, consumed (not implemented) by the core.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkOptions {
    /// Compress output blocks
    pub zip: bool,
    /// Double-stage compression; implies `zip`
    pub gzip: bool,
    /// Batched/packed block mode
    pub pack: bool,
    /// High resolution (microsecond) output time
    pub hi_res_time: bool,
    /// Optional symmetric encryption password
    pub password: Option<String>,
    /// Output time range committed per batch, in seconds (> 0)
    pub flush_interval: f64,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            zip: true,
            gzip: false,
            pack: false,
            hi_res_time: false,
            password: None,
            flush_interval: 1.0,
        }
    }
}

/// The protocol the emitter drives.
///
/// `set_time` is called exactly once per distinct non-negative source time;
/// every `put` that follows is recorded under that time marker until the
/// next `set_time`.
pub trait SeriesSink {
    /// Advance the sink's current time marker.
    fn set_time(&mut self, time: f64) -> Result<()>;

    /// Write one payload under the current time marker. `channel` already
    /// carries its type suffix.
    fn put(&mut self, channel: &str, value: &SampleValue) -> Result<()>;

    /// Write a text payload under the current time marker.
    fn put_text(&mut self, channel: &str, text: &str) -> Result<()> {
        self.put(channel, &SampleValue::Text(text.to_string()))
    }

    /// Commit and release the sink. Called once, on every exit path.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Creates sinks for destination paths.
pub trait SinkProvider {
    /// Create a sink rooted at `destination` with the given options.
    fn create(&self, destination: &Path, options: &SinkOptions) -> Result<Box<dyn SeriesSink>>;
}

/// Deterministic data destination:
/// `<output-root>/<input-file-base-name>/<parent-group-name>`.
pub fn destination(output_root: &Path, base_name: &str, parent_group: &str) -> PathBuf {
    output_root.join(base_name).join(parent_group)
}
