// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Format an epoch-seconds base time to a human-readable string.
pub fn format_base_time(secs: f64) -> String {
    let whole = secs.trunc() as i64;
    let datetime = chrono::DateTime::<chrono::Utc>::from_timestamp(whole, 0);

    match datetime {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{secs} s"),
    }
}
