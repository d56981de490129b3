// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Container input abstraction.
//!
//! The hierarchical container file is an external collaborator: this module
//! defines the read surface the converter consumes. Backends own handle,
//! group and library lifecycle; the converter only sees names, kinds,
//! layout descriptors, raw bytes and attributes.
//!
//! Shipped implementations: [`MemoryContainer`] (programmatic/test input)
//! and the JSON snapshot backend in [`json`]. Real HDF5 access is expected
//! from an external crate implementing [`ContainerBackend`].

pub mod json;
pub mod memory;
pub mod registry;

pub use json::JsonContainerBackend;
pub use memory::{MemoryContainer, MemoryDataset, MemoryGroup};
pub use registry::{BackendRegistry, ContainerBackend};

use crate::attrs::Attribute;
use crate::core::Result;
use crate::schema::{CompoundLayout, Dataspace};

/// Kind of a child object within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// A sub-group
    Group,
    /// A dataset
    Dataset,
    /// A named datatype
    NamedType,
    /// Anything else
    Other,
}

impl ObjectKind {
    /// Human-readable kind name for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Group => "group",
            ObjectKind::Dataset => "dataset",
            ObjectKind::NamedType => "named datatype",
            ObjectKind::Other => "other",
        }
    }
}

/// One child entry of a group, in name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Leaf name
    pub name: String,
    /// Object kind
    pub kind: ObjectKind,
}

impl ObjectEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Read surface of an open container file.
pub trait ContainerSource: std::fmt::Debug {
    /// Base name of the input file (no directories).
    fn base_name(&self) -> &str;

    /// Attributes of the root object.
    fn root_attributes(&self) -> Result<Vec<Attribute>>;

    /// Children of the root, in ascending name order.
    fn root_children(&self) -> Result<Vec<ObjectEntry>>;

    /// Attributes of a group directly under the root.
    fn group_attributes(&self, group: &str) -> Result<Vec<Attribute>>;

    /// Children of a group directly under the root, in ascending name order.
    fn group_children(&self, group: &str) -> Result<Vec<ObjectEntry>>;

    /// Open a dataset under a group.
    fn dataset(&self, group: &str, name: &str) -> Result<&dyn DatasetSource>;
}

/// Read surface of one dataset.
pub trait DatasetSource {
    /// Leaf name (the channel name).
    fn name(&self) -> &str;

    /// Compound element layout. Errors if the element type is not compound.
    fn compound_layout(&self) -> Result<CompoundLayout>;

    /// Dataspace shape.
    fn dataspace(&self) -> Result<Dataspace>;

    /// The full raw element buffer.
    fn read_raw(&self) -> Result<Vec<u8>>;

    /// Attributes of the dataset.
    fn attributes(&self) -> Result<Vec<Attribute>>;
}
