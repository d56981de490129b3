// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Binary record decoding.

pub mod record;

pub use record::RecordDecoder;
