// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for h5series.
//!
//! The taxonomy separates fatal run-level failures (configuration, container
//! resources, sink I/O) from per-dataset skip classes (schema validation,
//! record decoding). Skip classes are logged and the run continues with the
//! remaining datasets.

use std::fmt;

/// Errors that can occur during a conversion run.
#[derive(Debug, Clone)]
pub enum ConvertError {
    /// Invalid or missing configuration value
    Config {
        /// Configuration field that failed validation
        field: String,
        /// Validation error message
        reason: String,
    },

    /// Input container cannot be opened or a required backend is unavailable
    Resource {
        /// What was being accessed
        context: String,
        /// Error message
        message: String,
    },

    /// Dataset failed compound layout validation (dataset is skipped)
    Schema {
        /// Dataset name
        dataset: String,
        /// Validation error message
        reason: String,
    },

    /// Unrecognized member native type or undecodable record data
    /// (dataset is skipped)
    Decode {
        /// Dataset name
        dataset: String,
        /// Error message
        reason: String,
    },

    /// Attribute output file already exists or cannot be written
    MetadataWrite {
        /// Target path
        path: String,
        /// Error message
        reason: String,
    },

    /// Raw buffer too short for a fixed-offset field read
    BufferTooShort {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Byte offset when the error occurred
        offset: usize,
    },

    /// Output sink failure
    Sink {
        /// Sink destination or operation
        context: String,
        /// Error message
        message: String,
    },

    /// Other error
    Other(String),
}

impl ConvertError {
    /// Create a configuration error.
    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::Config {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a resource error.
    pub fn resource(context: impl Into<String>, message: impl Into<String>) -> Self {
        ConvertError::Resource {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a schema validation error.
    pub fn schema(dataset: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::Schema {
            dataset: dataset.into(),
            reason: reason.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(dataset: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::Decode {
            dataset: dataset.into(),
            reason: reason.into(),
        }
    }

    /// Create a metadata write error.
    pub fn metadata_write(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::MetadataWrite {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a buffer too short error.
    pub fn buffer_too_short(requested: usize, available: usize, offset: usize) -> Self {
        ConvertError::BufferTooShort {
            requested,
            available,
            offset,
        }
    }

    /// Create a sink error.
    pub fn sink(context: impl Into<String>, message: impl Into<String>) -> Self {
        ConvertError::Sink {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Whether this error aborts the whole run.
    ///
    /// Schema and decode failures (including short buffers discovered while
    /// decoding) are scoped to one dataset; everything else is fatal.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ConvertError::Schema { .. }
                | ConvertError::Decode { .. }
                | ConvertError::BufferTooShort { .. }
        )
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ConvertError::Config { field, reason } => {
                vec![("field", field.clone()), ("reason", reason.clone())]
            }
            ConvertError::Resource { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            ConvertError::Schema { dataset, reason } => {
                vec![("dataset", dataset.clone()), ("reason", reason.clone())]
            }
            ConvertError::Decode { dataset, reason } => {
                vec![("dataset", dataset.clone()), ("reason", reason.clone())]
            }
            ConvertError::MetadataWrite { path, reason } => {
                vec![("path", path.clone()), ("reason", reason.clone())]
            }
            ConvertError::BufferTooShort {
                requested,
                available,
                offset,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("offset", offset.to_string()),
            ],
            ConvertError::Sink { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            ConvertError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Config { field, reason } => {
                write!(f, "Invalid configuration '{field}': {reason}")
            }
            ConvertError::Resource { context, message } => {
                write!(f, "Resource error in {context}: {message}")
            }
            ConvertError::Schema { dataset, reason } => {
                write!(f, "Dataset '{dataset}' failed schema validation: {reason}")
            }
            ConvertError::Decode { dataset, reason } => {
                write!(f, "Failed to decode dataset '{dataset}': {reason}")
            }
            ConvertError::MetadataWrite { path, reason } => {
                write!(f, "Cannot write attributes to '{path}': {reason}")
            }
            ConvertError::BufferTooShort {
                requested,
                available,
                offset,
            } => write!(
                f,
                "Buffer too short: requested {requested} bytes at offset {offset}, but only {available} bytes available"
            ),
            ConvertError::Sink { context, message } => {
                write!(f, "Sink error in {context}: {message}")
            }
            ConvertError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Resource {
            context: "io".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for h5series operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = ConvertError::config("flush_interval", "must be greater than 0.0");
        assert!(matches!(err, ConvertError::Config { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid configuration 'flush_interval': must be greater than 0.0"
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_resource_error() {
        let err = ConvertError::resource("container", "cannot open input");
        assert!(matches!(err, ConvertError::Resource { .. }));
        assert_eq!(
            err.to_string(),
            "Resource error in container: cannot open input"
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_schema_error_is_skip_class() {
        let err = ConvertError::schema("chan1", "rank is not 1");
        assert_eq!(
            err.to_string(),
            "Dataset 'chan1' failed schema validation: rank is not 1"
        );
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_decode_error_is_skip_class() {
        let err = ConvertError::decode("chan1", "unrecognized member type");
        assert_eq!(
            err.to_string(),
            "Failed to decode dataset 'chan1': unrecognized member type"
        );
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_metadata_write_error() {
        let err = ConvertError::metadata_write("out/file.txt", "file already exists");
        assert_eq!(
            err.to_string(),
            "Cannot write attributes to 'out/file.txt': file already exists"
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_buffer_too_short_error() {
        let err = ConvertError::buffer_too_short(8, 4, 12);
        assert!(!err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Buffer too short: requested 8 bytes at offset 12, but only 4 bytes available"
        );
    }

    #[test]
    fn test_sink_error() {
        let err = ConvertError::sink("CTdata/foo", "disk full");
        assert_eq!(err.to_string(), "Sink error in CTdata/foo: disk full");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_log_fields_schema() {
        let err = ConvertError::schema("chan1", "reason");
        let fields = err.log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], ("dataset", "chan1".to_string()));
        assert_eq!(fields[1], ("reason", "reason".to_string()));
    }

    #[test]
    fn test_log_fields_buffer_too_short() {
        let err = ConvertError::buffer_too_short(8, 4, 12);
        let fields = err.log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ("requested", "8".to_string()));
        assert_eq!(fields[1], ("available", "4".to_string()));
        assert_eq!(fields[2], ("offset", "12".to_string()));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConvertError = io_err.into();
        assert!(matches!(err, ConvertError::Resource { .. }));
        assert_eq!(err.to_string(), "Resource error in io: file not found");
    }

    #[test]
    fn test_error_clone() {
        let err1 = ConvertError::schema("chan", "reason");
        let err2 = err1.clone();
        assert_eq!(err1.to_string(), err2.to_string());
    }
}
