// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Time-ordered emission.
//!
//! Drives one ascending pass over the aggregate: for each newly encountered
//! distinct non-negative time t, the sink's time marker advances to
//! `base_time + t` exactly once, then every sample in t's bucket is written
//! in channel-name order. Negative and non-finite times are skipped with a
//! diagnostic and never reach the sink. The walk enumerates one entry per
//! stored sample, so already-handled times repeat and must be skipped.

use tracing::warn;

use crate::aggregate::OrderedSamples;
use crate::core::Result;
use crate::sink::SeriesSink;

/// Counters from one emission pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitStats {
    /// Payloads handed to the sink
    pub records_emitted: u64,
    /// Distinct time markers set on the sink
    pub times_emitted: u64,
    /// Samples dropped for negative or non-finite times
    pub invalid_times_skipped: u64,
}

/// Walks the aggregate in time order and drives the output sink.
pub struct OutputEmitter {
    base_time: f64,
}

impl OutputEmitter {
    /// Create an emitter adding `base_time` seconds to every source time.
    pub fn new(base_time: f64) -> Self {
        Self { base_time }
    }

    /// Emit all samples to `sink`.
    pub fn emit(&self, ordered: &OrderedSamples, sink: &mut dyn SeriesSink) -> Result<EmitStats> {
        let mut stats = EmitStats::default();
        // Sentinel below any valid time.
        let mut prev_time = f64::NEG_INFINITY;

        for (index, sample) in ordered.as_slice().iter().enumerate() {
            let time = sample.time;
            if time < 0.0 || !time.is_finite() {
                warn!(
                    channel = %sample.channel,
                    time,
                    "skipping sample with invalid timestamp"
                );
                stats.invalid_times_skipped += 1;
                continue;
            }
            if time == prev_time {
                // Bucket already emitted on its first encounter.
                continue;
            }
            prev_time = time;

            sink.set_time(self.base_time + time)?;
            stats.times_emitted += 1;
            for grouped in ordered.run_at(index) {
                sink.put(&grouped.sink_channel(), &grouped.value)?;
                stats.records_emitted += 1;
            }
        }

        Ok(stats)
    }
}
