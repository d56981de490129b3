// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Time-ordered aggregation of decoded samples.
//!
//! Source files are channel-major; the sink needs time-major output. Since
//! arrival order across channels gives no bound on how values for a shared
//! timestamp interleave, the whole file's samples are buffered before any
//! output is produced. This is a deliberate O(total sample count) memory
//! cost; callers needing bounded memory must pre-partition input upstream.
//!
//! The aggregate is a single vector stable-sorted by (time ascending,
//! channel name ascending). Duplicate times are all retained, including
//! same-channel duplicates, and equal-time runs are contiguous after
//! sorting.

use std::cmp::Ordering;

use crate::core::DecodedSample;

/// Buffers decoded samples from all datasets, in any arrival order.
#[derive(Debug, Default)]
pub struct TimeOrderedAggregator {
    samples: Vec<DecodedSample>,
}

impl TimeOrderedAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one sample. Arrival order is irrelevant.
    pub fn insert(&mut self, sample: DecodedSample) {
        self.samples.push(sample);
    }

    /// Insert a batch of samples (typically one decoded dataset).
    pub fn extend(&mut self, samples: impl IntoIterator<Item = DecodedSample>) {
        self.samples.extend(samples);
    }

    /// Number of buffered samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no samples have been buffered.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Materialize the total order over (time, channel name).
    ///
    /// Stable sort: samples with identical (time, channel) keep their
    /// arrival order.
    pub fn into_ordered(mut self) -> OrderedSamples {
        self.samples.sort_by(compare_samples);
        OrderedSamples {
            samples: self.samples,
        }
    }
}

fn compare_samples(a: &DecodedSample, b: &DecodedSample) -> Ordering {
    a.time
        .total_cmp(&b.time)
        .then_with(|| a.channel.cmp(&b.channel))
}

/// All samples of a run, sorted by (time ascending, channel ascending).
#[derive(Debug)]
pub struct OrderedSamples {
    samples: Vec<DecodedSample>,
}

impl OrderedSamples {
    /// The full ordered sequence, one entry per stored sample.
    pub fn as_slice(&self) -> &[DecodedSample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the run holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The contiguous run of samples sharing the time at `index`.
    ///
    /// Returns an empty slice if `index` is out of bounds. The run spans
    /// possibly many channels, already ordered by channel name.
    pub fn run_at(&self, index: usize) -> &[DecodedSample] {
        let Some(first) = self.samples.get(index) else {
            return &[];
        };
        let time = first.time;
        let end = self.samples[index..]
            .iter()
            .position(|s| s.time.total_cmp(&time) != Ordering::Equal)
            .map(|p| index + p)
            .unwrap_or(self.samples.len());
        &self.samples[index..end]
    }

    /// All samples recorded at exactly `time`.
    pub fn samples_at(&self, time: f64) -> &[DecodedSample] {
        let start = self
            .samples
            .partition_point(|s| s.time.total_cmp(&time) == Ordering::Less);
        self.run_at(start)
    }
}
