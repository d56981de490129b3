// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON snapshot container backend.
//!
//! Reads a container described as a JSON document: hierarchy, compound
//! layout descriptors, attributes and hex-encoded raw element bytes. This
//! is the one file-backed backend the crate ships; it exists for fixtures,
//! demos and round-tripping container contents without a native format
//! library.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "attributes": [{"name": "title", "value": "run 7", "type": "STRING"}],
//!   "groups": [{
//!     "name": "Foo1",
//!     "attributes": [],
//!     "datasets": [{
//!       "name": "chan1",
//!       "layout": {
//!         "members": [
//!           {"name": "time", "class": "float", "byte_size": 8, "byte_offset": 0, "signed": true},
//!           {"name": "value", "class": "float", "byte_size": 4, "byte_offset": 8, "signed": true}
//!         ],
//!         "element_size": 12
//!       },
//!       "dataspace": {"dims": [2]},
//!       "data": "000000000000f03f9a99193f00000000000000409a99993f"
//!     }]
//!   }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attrs::Attribute;
use crate::core::{ConvertError, Result};
use crate::schema::{CompoundLayout, Dataspace};

use super::memory::{MemoryContainer, MemoryDataset, MemoryGroup};
use super::{ContainerBackend, ContainerSource};

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotDoc {
    #[serde(default)]
    attributes: Vec<Attribute>,
    #[serde(default)]
    groups: Vec<GroupDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GroupDoc {
    name: String,
    #[serde(default)]
    attributes: Vec<Attribute>,
    #[serde(default)]
    datasets: Vec<DatasetDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DatasetDoc {
    name: String,
    #[serde(default)]
    attributes: Vec<Attribute>,
    layout: CompoundLayout,
    dataspace: Dataspace,
    /// Hex-encoded raw element bytes
    #[serde(default)]
    data: String,
}

/// Backend for `.json` snapshot documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonContainerBackend;

impl JsonContainerBackend {
    fn load(path: &Path) -> Result<MemoryContainer> {
        let text = fs::read_to_string(path)
            .map_err(|e| ConvertError::resource(path.display().to_string(), e.to_string()))?;
        let doc: SnapshotDoc = serde_json::from_str(&text).map_err(|e| {
            ConvertError::resource(
                path.display().to_string(),
                format!("invalid snapshot document: {e}"),
            )
        })?;

        let base_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut container = MemoryContainer::new(base_name);
        for attribute in doc.attributes {
            container = container.with_attribute(attribute);
        }
        for group_doc in doc.groups {
            let mut group = MemoryGroup::new(group_doc.name);
            for attribute in group_doc.attributes {
                group = group.with_attribute(attribute);
            }
            for dataset_doc in group_doc.datasets {
                let raw = hex::decode(dataset_doc.data.as_bytes()).map_err(|e| {
                    ConvertError::resource(
                        path.display().to_string(),
                        format!("dataset '{}' has invalid hex data: {e}", dataset_doc.name),
                    )
                })?;
                let mut dataset =
                    MemoryDataset::new(dataset_doc.name, dataset_doc.layout, dataset_doc.dataspace)
                        .with_raw(raw);
                for attribute in dataset_doc.attributes {
                    dataset = dataset.with_attribute(attribute);
                }
                group = group.with_dataset(dataset);
            }
            container = container.with_group(group);
        }
        Ok(container)
    }
}

impl ContainerBackend for JsonContainerBackend {
    fn name(&self) -> &'static str {
        "json-snapshot"
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension().is_some_and(|e| e == "json")
    }

    fn open(&self, path: &Path) -> Result<Box<dyn ContainerSource>> {
        Ok(Box::new(Self::load(path)?))
    }
}
