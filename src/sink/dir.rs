// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Plain-directory sink.
//!
//! Materializes the sink protocol as a time-folder tree: one directory per
//! distinct output time under the destination, one file per channel payload.
//! `hi_res_time` selects microsecond time folder names, otherwise
//! millisecond. Compression, packing and encryption options are accepted
//! but not implemented here; their mechanics belong to a real series store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::{ConvertError, Result, SampleValue};

use super::{SeriesSink, SinkOptions, SinkProvider};

/// Filesystem sink writing one folder per output time.
pub struct DirSink {
    destination: PathBuf,
    hi_res_time: bool,
    current_dir: Option<PathBuf>,
}

impl DirSink {
    /// Create a sink rooted at `destination`.
    pub fn create(destination: &Path, options: &SinkOptions) -> Result<Self> {
        if options.zip || options.gzip || options.pack || options.password.is_some() {
            warn!(
                destination = %destination.display(),
                "directory sink ignores compression, packing and encryption options"
            );
        }
        fs::create_dir_all(destination).map_err(|e| {
            ConvertError::sink(destination.display().to_string(), e.to_string())
        })?;
        Ok(Self {
            destination: destination.to_path_buf(),
            hi_res_time: options.hi_res_time,
            current_dir: None,
        })
    }

    fn time_folder(&self, time: f64) -> String {
        if self.hi_res_time {
            format!("{time:.6}")
        } else {
            format!("{time:.3}")
        }
    }
}

impl SeriesSink for DirSink {
    fn set_time(&mut self, time: f64) -> Result<()> {
        let dir = self.destination.join(self.time_folder(time));
        fs::create_dir_all(&dir)
            .map_err(|e| ConvertError::sink(dir.display().to_string(), e.to_string()))?;
        self.current_dir = Some(dir);
        Ok(())
    }

    fn put(&mut self, channel: &str, value: &SampleValue) -> Result<()> {
        let dir = self.current_dir.as_ref().ok_or_else(|| {
            ConvertError::sink(
                self.destination.display().to_string(),
                "put before set_time",
            )
        })?;
        let path = dir.join(channel);
        fs::write(&path, value.render())
            .map_err(|e| ConvertError::sink(path.display().to_string(), e.to_string()))
    }
}

/// Provider for [`DirSink`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DirSinkProvider;

impl SinkProvider for DirSinkProvider {
    fn create(&self, destination: &Path, options: &SinkOptions) -> Result<Box<dyn SeriesSink>> {
        Ok(Box::new(DirSink::create(destination, options)?))
    }
}
