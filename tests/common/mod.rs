// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use h5series::schema::{CompoundLayout, CompoundMember, Dataspace, MemberClass};

/// Build a 2-member {time: f64, value} layout with the given value field.
pub fn time_value_layout(value_class: MemberClass, value_size: usize, signed: bool) -> CompoundLayout {
    CompoundLayout {
        members: vec![
            CompoundMember {
                name: "time".to_string(),
                class: MemberClass::Float,
                byte_size: 8,
                byte_offset: 0,
                signed: true,
            },
            CompoundMember {
                name: "value".to_string(),
                class: value_class,
                byte_size: value_size,
                byte_offset: 8,
                signed,
            },
        ],
        element_size: 8 + value_size,
    }
}

/// Flat dataspace over `len` records.
pub fn flat(len: u64) -> Dataspace {
    Dataspace::flat(len)
}

/// Encode {f64 time, f64 value} records, little-endian.
pub fn f64_records(records: &[(f64, f64)]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(records.len() * 16);
    for (t, v) in records {
        raw.extend_from_slice(&t.to_le_bytes());
        raw.extend_from_slice(&v.to_le_bytes());
    }
    raw
}

/// Encode {f64 time, f32 value} records, little-endian.
pub fn f32_records(records: &[(f64, f32)]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(records.len() * 12);
    for (t, v) in records {
        raw.extend_from_slice(&t.to_le_bytes());
        raw.extend_from_slice(&v.to_le_bytes());
    }
    raw
}

/// Encode {f64 time, i32 value} records, little-endian.
pub fn i32_records(records: &[(f64, i32)]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(records.len() * 12);
    for (t, v) in records {
        raw.extend_from_slice(&t.to_le_bytes());
        raw.extend_from_slice(&v.to_le_bytes());
    }
    raw
}

/// Encode {f64 time, i16 value} records, little-endian.
pub fn i16_records(records: &[(f64, i16)]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(records.len() * 10);
    for (t, v) in records {
        raw.extend_from_slice(&t.to_le_bytes());
        raw.extend_from_slice(&v.to_le_bytes());
    }
    raw
}

/// Fresh scratch directory under the system temp dir, removed first if it
/// survived a previous run.
pub fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("h5series-it-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
