// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # h5series
//!
//! Converts channel-major hierarchical container files into time-ordered
//! series output.
//!
//! Input containers store one dataset per channel, each a flat sequence of
//! `{time, value}` compound records. This library inverts that layout: all
//! samples of the first top-level group are decoded, merged into one
//! ascending timeline and replayed against a time-series sink, so that
//! everything recorded at the same instant lands under one time marker.
//!
//! ## Architecture
//!
//! The pipeline is four stages, each its own module:
//! - `schema/` - compound layout validation and semantic type classification
//! - `decode/` - raw little-endian record buffers to typed samples
//! - `aggregate/` - the time-ordered merge across channels
//! - `emit/` - the ascending replay against a [`sink::SeriesSink`]
//!
//! Around them:
//! - `container/` - read abstraction over input files, with an in-memory
//!   implementation and a JSON snapshot backend
//! - `sink/` - the output protocol plus directory and recording sinks
//! - `attrs/` - metadata attribute rendering and delivery
//! - `pipeline/` - configuration and the [`pipeline::Converter`] driving a
//!   full run
//!
//! ## Example
//!
//! ```rust,no_run
//! # fn main() -> Result<(), h5series::ConvertError> {
//! use h5series::container::BackendRegistry;
//! use h5series::pipeline::{Config, Converter};
//! use h5series::sink::DirSinkProvider;
//!
//! let config = Config::new("run7.json");
//! let container = BackendRegistry::with_defaults().open(&config.input_path)?;
//! let stats = Converter::new(config).run(container.as_ref(), &DirSinkProvider)?;
//! println!("{} samples written", stats.records_emitted);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{ConvertError, DecodedSample, Result, SampleValue};

// Schema inspection
pub mod schema;

// Record decoding
pub mod decode;

// Time-ordered aggregation
pub mod aggregate;

// Time-ordered emission
pub mod emit;

// Metadata attributes
pub mod attrs;

// Container input abstraction
pub mod container;

// Output sink protocol
pub mod sink;

// Configuration and run orchestration
pub mod pipeline;

// Re-export the run surface
pub use pipeline::{Config, Converter, RunStats};
