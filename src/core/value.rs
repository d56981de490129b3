// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Sample value type system.
//!
//! Provides the tagged value representation carried by every decoded sample.
//! The tag drives sink channel naming: each numeric width maps to a fixed
//! channel-name suffix, with `.txt` reserved for string-valued attribute
//! channels.

use serde::{Deserialize, Serialize};

/// Tagged value decoded from the value field of a compound record.
///
/// Unsigned source fields (u64/u32/u16) are decoded into the signed variant
/// of identical bit width with no range check; top-bit-set values therefore
/// appear negative downstream. This is a documented limitation, not a bug to
/// fix here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SampleValue {
    /// 64-bit float
    Float64(f64),
    /// 32-bit float
    Float32(f32),
    /// 64-bit integer (also carries decoded u64)
    Int64(i64),
    /// 32-bit integer (also carries decoded u32)
    Int32(i32),
    /// 16-bit integer (also carries decoded u16)
    Int16(i16),
    /// Text payload for attribute channels
    Text(String),
}

impl SampleValue {
    /// Sink channel-name suffix selected by the value tag.
    pub fn suffix(&self) -> &'static str {
        match self {
            SampleValue::Float64(_) => ".f64",
            SampleValue::Float32(_) => ".f32",
            SampleValue::Int64(_) => ".i64",
            SampleValue::Int32(_) => ".i32",
            SampleValue::Int16(_) => ".i16",
            SampleValue::Text(_) => ".txt",
        }
    }

    /// Check if this value is numeric.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, SampleValue::Text(_))
    }

    /// Check if this value is an integer type.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            SampleValue::Int64(_) | SampleValue::Int32(_) | SampleValue::Int16(_)
        )
    }

    /// Check if this value is a floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self, SampleValue::Float64(_) | SampleValue::Float32(_))
    }

    /// Try to convert this value to f64 (numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SampleValue::Float64(v) => Some(*v),
            SampleValue::Float32(v) => Some(*v as f64),
            SampleValue::Int64(v) => Some(*v as f64),
            SampleValue::Int32(v) => Some(*v as f64),
            SampleValue::Int16(v) => Some(*v as f64),
            SampleValue::Text(_) => None,
        }
    }

    /// Try to get the inner text payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SampleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render the payload the way the sink receives it.
    pub fn render(&self) -> String {
        match self {
            SampleValue::Float64(v) => v.to_string(),
            SampleValue::Float32(v) => v.to_string(),
            SampleValue::Int64(v) => v.to_string(),
            SampleValue::Int32(v) => v.to_string(),
            SampleValue::Int16(v) => v.to_string(),
            SampleValue::Text(s) => s.clone(),
        }
    }
}

/// One decoded (channel, time, value) sample.
///
/// Immutable once produced by the record decoder; time is in seconds,
/// decoder-native units, before the base time offset is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedSample {
    /// Leaf name of the source dataset (not a qualified path)
    pub channel: String,
    /// Sample time in seconds, pre-base-time-offset
    pub time: f64,
    /// Tagged value payload
    pub value: SampleValue,
}

impl DecodedSample {
    /// Create a new sample.
    pub fn new(channel: impl Into<String>, time: f64, value: SampleValue) -> Self {
        Self {
            channel: channel.into(),
            time,
            value,
        }
    }

    /// Sink channel name: source channel plus the value-type suffix.
    pub fn sink_channel(&self) -> String {
        format!("{}{}", self.channel, self.value.suffix())
    }
}
