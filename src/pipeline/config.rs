// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion run configuration.

use std::path::PathBuf;

use crate::core::{ConvertError, Result};
use crate::sink::SinkOptions;

/// Default base time: 2017-01-01 00:00:00 UTC, in epoch seconds.
pub const DEFAULT_BASE_TIME: f64 = 1_483_246_800.0;

/// Default output time range committed per batch, in seconds.
pub const DEFAULT_FLUSH_INTERVAL: f64 = 1.0;

/// Default output root directory.
pub const DEFAULT_OUTPUT_ROOT: &str = "CTdata";

/// Everything one conversion run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the input container file
    pub input_path: PathBuf,
    /// Root directory under which destinations are built
    pub output_root: PathBuf,
    /// Output time range committed per batch, in seconds (> 0)
    pub flush_interval: f64,
    /// Offset added to every source time on output (>= 0)
    pub base_time: f64,
    /// Optional symmetric encryption password, passed through to the sink
    pub password: Option<String>,
    /// Compress output blocks
    pub zip: bool,
    /// Double-stage compression; implies `zip`
    pub gzip: bool,
    /// Batched/packed block mode
    pub pack: bool,
    /// High resolution (microsecond) output time
    pub hi_res_time: bool,
    /// Deliver attributes to files instead of sink channels
    pub attributes_to_file: bool,
}

impl Config {
    /// Configuration for `input` with every knob at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            base_time: DEFAULT_BASE_TIME,
            password: None,
            zip: true,
            gzip: false,
            pack: false,
            hi_res_time: false,
            attributes_to_file: false,
        }
    }

    /// Check field-level constraints.
    ///
    /// Input-path existence is checked where the file is opened, not here.
    pub fn validate(&self) -> Result<()> {
        if !(self.flush_interval > 0.0) {
            return Err(ConvertError::config(
                "flush_interval",
                format!("must be > 0, got {}", self.flush_interval),
            ));
        }
        if !(self.base_time >= 0.0) {
            return Err(ConvertError::config(
                "base_time",
                format!("must be >= 0, got {}", self.base_time),
            ));
        }
        if self.gzip && !self.zip {
            return Err(ConvertError::config(
                "gzip",
                "double-stage compression requires zip",
            ));
        }
        if let Some(password) = &self.password {
            if password.is_empty() {
                return Err(ConvertError::config("password", "must not be empty"));
            }
        }
        Ok(())
    }

    /// Sink options derived from this configuration.
    pub fn sink_options(&self) -> SinkOptions {
        SinkOptions {
            zip: self.zip,
            gzip: self.gzip,
            pack: self.pack,
            hi_res_time: self.hi_res_time,
            password: self.password.clone(),
            flush_interval: self.flush_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("foo.h5");
        assert_eq!(config.output_root, PathBuf::from("CTdata"));
        assert_eq!(config.flush_interval, 1.0);
        assert_eq!(config.base_time, 1_483_246_800.0);
        assert!(config.zip);
        assert!(!config.gzip);
        assert!(!config.attributes_to_file);
        config.validate().unwrap();
    }

    #[test]
    fn test_rejects_non_positive_flush() {
        let mut config = Config::new("foo.h5");
        config.flush_interval = 0.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConvertError::Config { .. }
        ));

        config.flush_interval = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_base_time() {
        let mut config = Config::new("foo.h5");
        config.base_time = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_gzip_without_zip() {
        let mut config = Config::new("foo.h5");
        config.zip = false;
        config.gzip = true;
        assert!(config.validate().is_err());

        config.zip = true;
        config.validate().unwrap();
    }

    #[test]
    fn test_rejects_empty_password() {
        let mut config = Config::new("foo.h5");
        config.password = Some(String::new());
        assert!(config.validate().is_err());

        config.password = Some("secret".to_string());
        config.validate().unwrap();
    }

    #[test]
    fn test_sink_options_carry_through() {
        let mut config = Config::new("foo.h5");
        config.pack = true;
        config.hi_res_time = true;
        config.flush_interval = 0.5;

        let opts = config.sink_options();
        assert!(opts.pack);
        assert!(opts.hi_res_time);
        assert_eq!(opts.flush_interval, 0.5);
    }
}
