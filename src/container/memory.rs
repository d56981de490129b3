// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! In-memory container implementation.
//!
//! The programmatic entry point for callers that already hold their data,
//! and the fixture type behind the JSON snapshot backend and the test
//! suite. Children are kept sorted by name so enumeration order matches
//! what a name-indexed container iteration would report.

use crate::attrs::Attribute;
use crate::core::{ConvertError, Result};
use crate::schema::{CompoundLayout, Dataspace};

use super::{ContainerSource, DatasetSource, ObjectEntry, ObjectKind};

/// An in-memory dataset: layout descriptor, shape, raw bytes, attributes.
#[derive(Debug, Clone)]
pub struct MemoryDataset {
    name: String,
    layout: Option<CompoundLayout>,
    dataspace: Dataspace,
    raw: Vec<u8>,
    attributes: Vec<Attribute>,
}

impl MemoryDataset {
    /// Create a dataset with a compound layout.
    pub fn new(name: impl Into<String>, layout: CompoundLayout, dataspace: Dataspace) -> Self {
        Self {
            name: name.into(),
            layout: Some(layout),
            dataspace,
            raw: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Create a dataset whose element type is not compound.
    pub fn non_compound(name: impl Into<String>, dataspace: Dataspace) -> Self {
        Self {
            name: name.into(),
            layout: None,
            dataspace,
            raw: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Set the raw element buffer.
    pub fn with_raw(mut self, raw: Vec<u8>) -> Self {
        self.raw = raw;
        self
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

impl DatasetSource for MemoryDataset {
    fn name(&self) -> &str {
        &self.name
    }

    fn compound_layout(&self) -> Result<CompoundLayout> {
        self.layout
            .clone()
            .ok_or_else(|| ConvertError::schema(&self.name, "element type is not compound"))
    }

    fn dataspace(&self) -> Result<Dataspace> {
        Ok(self.dataspace.clone())
    }

    fn read_raw(&self) -> Result<Vec<u8>> {
        Ok(self.raw.clone())
    }

    fn attributes(&self) -> Result<Vec<Attribute>> {
        Ok(self.attributes.clone())
    }
}

/// A group directly under the container root.
#[derive(Debug, Clone, Default)]
pub struct MemoryGroup {
    name: String,
    attributes: Vec<Attribute>,
    datasets: Vec<MemoryDataset>,
    other_children: Vec<ObjectEntry>,
}

impl MemoryGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a dataset.
    pub fn with_dataset(mut self, dataset: MemoryDataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Add a non-dataset child (sub-group, named datatype, ...).
    pub fn with_child(mut self, name: impl Into<String>, kind: ObjectKind) -> Self {
        self.other_children.push(ObjectEntry::new(name, kind));
        self
    }

    fn children(&self) -> Vec<ObjectEntry> {
        let mut entries: Vec<ObjectEntry> = self
            .datasets
            .iter()
            .map(|d| ObjectEntry::new(d.name.clone(), ObjectKind::Dataset))
            .chain(self.other_children.iter().cloned())
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

/// An in-memory container file.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    base_name: String,
    attributes: Vec<Attribute>,
    groups: Vec<MemoryGroup>,
    other_root_children: Vec<ObjectEntry>,
}

impl MemoryContainer {
    /// Create an empty container with the given file base name.
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            ..Self::default()
        }
    }

    /// Add a root attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a top-level group.
    pub fn with_group(mut self, group: MemoryGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Add a non-group root child.
    pub fn with_root_child(mut self, name: impl Into<String>, kind: ObjectKind) -> Self {
        self.other_root_children.push(ObjectEntry::new(name, kind));
        self
    }

    fn group(&self, name: &str) -> Result<&MemoryGroup> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| ConvertError::resource("container", format!("no such group '{name}'")))
    }
}

impl ContainerSource for MemoryContainer {
    fn base_name(&self) -> &str {
        &self.base_name
    }

    fn root_attributes(&self) -> Result<Vec<Attribute>> {
        Ok(self.attributes.clone())
    }

    fn root_children(&self) -> Result<Vec<ObjectEntry>> {
        let mut entries: Vec<ObjectEntry> = self
            .groups
            .iter()
            .map(|g| ObjectEntry::new(g.name.clone(), ObjectKind::Group))
            .chain(self.other_root_children.iter().cloned())
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn group_attributes(&self, group: &str) -> Result<Vec<Attribute>> {
        Ok(self.group(group)?.attributes.clone())
    }

    fn group_children(&self, group: &str) -> Result<Vec<ObjectEntry>> {
        Ok(self.group(group)?.children())
    }

    fn dataset(&self, group: &str, name: &str) -> Result<&dyn DatasetSource> {
        let dataset = self
            .group(group)?
            .datasets
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| {
                ConvertError::resource(
                    "container",
                    format!("no such dataset '{name}' in group '{group}'"),
                )
            })?;
        Ok(dataset)
    }
}
