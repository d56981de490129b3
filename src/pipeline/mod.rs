// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion pipeline.
//!
//! One [`Converter::run`] drives a full conversion: root and group
//! attributes are delivered, every dataset of the first top-level group is
//! inspected, decoded and aggregated, and the aggregate is emitted
//! time-ordered to one data sink at the deterministic destination. The run
//! is strictly sequential; dataset failures of skip class are logged and
//! counted, everything else aborts.

pub mod config;

pub use config::Config;

use std::path::PathBuf;

use chrono::Utc;
use tracing::{info, warn};

use crate::aggregate::TimeOrderedAggregator;
use crate::attrs::{self, Attribute};
use crate::container::{ContainerSource, DatasetSource, ObjectKind};
use crate::core::{ConvertError, Result};
use crate::decode::RecordDecoder;
use crate::emit::OutputEmitter;
use crate::schema::{DatasetSchema, SchemaInspector};
use crate::sink::{destination, SeriesSink, SinkOptions, SinkProvider};

/// Counters from one conversion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Dataset children encountered in the parent group
    pub datasets_seen: u64,
    /// Datasets that passed inspection and decoded cleanly
    pub datasets_converted: u64,
    /// Datasets rejected by inspection or decoding
    pub datasets_skipped: u64,
    /// Samples decoded across all converted datasets
    pub samples_decoded: u64,
    /// Distinct time markers set on the data sink
    pub times_emitted: u64,
    /// Payloads handed to the data sink
    pub records_emitted: u64,
    /// Samples dropped for negative or non-finite times
    pub invalid_times_skipped: u64,
    /// Attribute deliveries that failed
    pub metadata_failures: u64,
}

/// Owns one configured conversion and runs it against a container.
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a converter for `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this converter runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert `container` and write through sinks from `sinks`.
    pub fn run(
        &self,
        container: &dyn ContainerSource,
        sinks: &dyn SinkProvider,
    ) -> Result<RunStats> {
        self.config.validate()?;

        let mut stats = RunStats::default();
        let base_name = container.base_name();
        let mut metadata = MetadataDelivery::new(&self.config, sinks, base_name);

        metadata.deliver_root(&container.root_attributes()?, &mut stats)?;

        let root_children = container.root_children()?;
        let mut groups = root_children.iter().filter(|c| c.kind == ObjectKind::Group);
        let group = groups.next().ok_or_else(|| {
            ConvertError::resource(base_name.to_string(), "container has no top-level group")
        })?;
        for extra in groups {
            warn!(group = %extra.name, "ignoring additional top-level group");
        }
        let group_name = group.name.as_str();

        metadata.deliver_group(group_name, &container.group_attributes(group_name)?, &mut stats)?;

        let mut aggregator = TimeOrderedAggregator::new();
        for child in container.group_children(group_name)? {
            if child.kind != ObjectKind::Dataset {
                warn!(
                    name = %child.name,
                    kind = child.kind.as_str(),
                    "skipping non-dataset group child"
                );
                continue;
            }
            stats.datasets_seen += 1;

            let dataset = container.dataset(group_name, &child.name)?;
            let schema = match Self::inspect(dataset) {
                Ok(schema) => schema,
                Err(err) if !err.is_fatal() => {
                    warn!(dataset = %child.name, error = %err, "skipping dataset");
                    stats.datasets_skipped += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };

            metadata.deliver_dataset(group_name, &child.name, &dataset.attributes()?, &mut stats)?;

            let raw = dataset.read_raw()?;
            match RecordDecoder::decode(&child.name, &raw, &schema) {
                Ok(samples) => {
                    stats.datasets_converted += 1;
                    stats.samples_decoded += samples.len() as u64;
                    aggregator.extend(samples);
                }
                Err(err) if !err.is_fatal() => {
                    warn!(dataset = %child.name, error = %err, "skipping dataset");
                    stats.datasets_skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }
        metadata.close()?;

        let dest = destination(&self.config.output_root, base_name, group_name);
        let mut sink = sinks.create(&dest, &self.config.sink_options())?;
        let ordered = aggregator.into_ordered();
        let emitted = OutputEmitter::new(self.config.base_time).emit(&ordered, sink.as_mut());
        let closed = sink.close();
        let emitted = emitted?;
        closed?;

        stats.times_emitted = emitted.times_emitted;
        stats.records_emitted = emitted.records_emitted;
        stats.invalid_times_skipped = emitted.invalid_times_skipped;

        info!(
            destination = %dest.display(),
            datasets = stats.datasets_converted,
            skipped = stats.datasets_skipped,
            samples = stats.samples_decoded,
            times = stats.times_emitted,
            "conversion finished"
        );
        Ok(stats)
    }

    fn inspect(dataset: &dyn DatasetSource) -> Result<DatasetSchema> {
        let layout = dataset.compound_layout()?;
        let space = dataset.dataspace()?;
        SchemaInspector::inspect(dataset.name(), &layout, &space)
    }
}

/// Delivers object attributes to exactly one of the two destinations.
///
/// A failed delivery is counted, logged and disables all further attribute
/// delivery; the data conversion keeps going.
struct MetadataDelivery<'a> {
    config: &'a Config,
    sinks: &'a dyn SinkProvider,
    base_name: &'a str,
    group_sink: Option<Box<dyn SeriesSink>>,
    enabled: bool,
}

impl<'a> MetadataDelivery<'a> {
    fn new(config: &'a Config, sinks: &'a dyn SinkProvider, base_name: &'a str) -> Self {
        Self {
            config,
            sinks,
            base_name,
            group_sink: None,
            enabled: true,
        }
    }

    /// Wall-clock stamp for sink-delivered attribute records.
    fn stamp() -> f64 {
        Utc::now().timestamp_millis() as f64 / 1000.0
    }

    fn object_root(&self) -> PathBuf {
        self.config.output_root.join(self.base_name)
    }

    fn deliver_root(&mut self, attrs: &[Attribute], stats: &mut RunStats) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let outcome = if self.config.attributes_to_file {
            let path = self.object_root().join(format!("{}.txt", self.base_name));
            attrs::deliver_to_file(&path, attrs)
        } else {
            self.deliver_root_to_sink(attrs)
        };
        self.settle(outcome, stats)
    }

    fn deliver_root_to_sink(&mut self, attrs: &[Attribute]) -> Result<()> {
        let dest = self.object_root().join("_Attributes");
        let mut sink = self.sinks.create(&dest, &SinkOptions::default())?;
        let channel = format!("{}.txt", self.base_name);
        attrs::deliver_to_sink(sink.as_mut(), &channel, attrs, Self::stamp())?;
        sink.close()
    }

    fn deliver_group(
        &mut self,
        group: &str,
        attrs: &[Attribute],
        stats: &mut RunStats,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let outcome = if self.config.attributes_to_file {
            let path = self.object_root().join(group).join(format!("{group}.txt"));
            attrs::deliver_to_file(&path, attrs)
        } else {
            self.deliver_group_to_sink(group, &format!("{group}.txt"), attrs)
        };
        self.settle(outcome, stats)
    }

    fn deliver_dataset(
        &mut self,
        group: &str,
        dataset: &str,
        attrs: &[Attribute],
        stats: &mut RunStats,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let outcome = if self.config.attributes_to_file {
            let path = self
                .object_root()
                .join(group)
                .join("_Attributes")
                .join(format!("{dataset}.txt"));
            attrs::deliver_to_file(&path, attrs)
        } else {
            self.deliver_group_to_sink(group, &format!("{dataset}.txt"), attrs)
        };
        self.settle(outcome, stats)
    }

    /// Group and dataset attributes share one sink under the group folder.
    fn deliver_group_to_sink(
        &mut self,
        group: &str,
        channel: &str,
        attrs: &[Attribute],
    ) -> Result<()> {
        if self.group_sink.is_none() {
            let dest = self.object_root().join(group).join("_Attributes");
            self.group_sink = Some(self.sinks.create(&dest, &SinkOptions::default())?);
        }
        match self.group_sink.as_mut() {
            Some(sink) => attrs::deliver_to_sink(sink.as_mut(), channel, attrs, Self::stamp()),
            None => Ok(()),
        }
    }

    fn settle(&mut self, outcome: Result<()>, stats: &mut RunStats) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(err @ ConvertError::MetadataWrite { .. }) => {
                warn!(error = %err, "attribute delivery failed, disabling metadata output");
                stats.metadata_failures += 1;
                self.enabled = false;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn close(&mut self) -> Result<()> {
        match self.group_sink.take() {
            Some(mut sink) => sink.close(),
            None => Ok(()),
        }
    }
}
