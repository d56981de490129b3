// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout h5series.
//!
//! This module provides the foundational types for the library:
//! - [`ConvertError`] - Error taxonomy with fatal/skip classification
//! - [`SampleValue`] - Tagged value representation
//! - [`DecodedSample`] - One decoded (channel, time, value) sample

pub mod error;
pub mod value;

pub use error::{ConvertError, Result};
pub use value::{DecodedSample, SampleValue};
