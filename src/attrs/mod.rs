// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Metadata attribute rendering and delivery.
//!
//! Attributes of the root object, the parent group and each valid dataset
//! are serialized as an ordered JSON array and delivered to exactly one of
//! two destinations: a `"<object>.txt"` channel through the output sink, or
//! a file at a deterministic path mirroring the object hierarchy. Writing
//! to an already-existing file is fatal for the file delivery branch only.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ConvertError, Result};
use crate::sink::SeriesSink;

/// Type tag of an attribute's original datatype class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeTypeTag {
    Integer,
    Float,
    Char,
    String,
    Bitfield,
    Opaque,
    Compound,
    Reference,
    Enum,
    Vlen,
    Array,
    Time,
    Unknown,
}

impl AttributeTypeTag {
    /// Tag name as rendered in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeTypeTag::Integer => "INTEGER",
            AttributeTypeTag::Float => "FLOAT",
            AttributeTypeTag::Char => "CHAR",
            AttributeTypeTag::String => "STRING",
            AttributeTypeTag::Bitfield => "BITFIELD",
            AttributeTypeTag::Opaque => "OPAQUE",
            AttributeTypeTag::Compound => "COMPOUND",
            AttributeTypeTag::Reference => "REFERENCE",
            AttributeTypeTag::Enum => "ENUM",
            AttributeTypeTag::Vlen => "VLEN",
            AttributeTypeTag::Array => "ARRAY",
            AttributeTypeTag::Time => "TIME",
            AttributeTypeTag::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for AttributeTypeTag {
    type Err = std::convert::Infallible;

    /// Unrecognized names fold into `Unknown`, matching the default branch
    /// of the original datatype-class switch.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "INTEGER" => AttributeTypeTag::Integer,
            "FLOAT" => AttributeTypeTag::Float,
            "CHAR" => AttributeTypeTag::Char,
            "STRING" => AttributeTypeTag::String,
            "BITFIELD" => AttributeTypeTag::Bitfield,
            "OPAQUE" => AttributeTypeTag::Opaque,
            "COMPOUND" => AttributeTypeTag::Compound,
            "REFERENCE" => AttributeTypeTag::Reference,
            "ENUM" => AttributeTypeTag::Enum,
            "VLEN" => AttributeTypeTag::Vlen,
            "ARRAY" => AttributeTypeTag::Array,
            "TIME" => AttributeTypeTag::Time,
            _ => AttributeTypeTag::Unknown,
        })
    }
}

/// One metadata attribute with a stringified value.
///
/// Field order matters: serialization renders `name`, `value`, `type` in
/// that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Stringified value; multi-valued attributes are comma-joined
    pub value: String,
    /// Original datatype class
    #[serde(rename = "type")]
    pub type_tag: AttributeTypeTag,
}

impl Attribute {
    /// Create an attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>, type_tag: AttributeTypeTag) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            type_tag,
        }
    }

    /// Create an attribute from multiple values, comma-joined regardless of
    /// original rank or shape.
    pub fn joined<T: ToString>(
        name: impl Into<String>,
        values: &[T],
        type_tag: AttributeTypeTag,
    ) -> Self {
        let value = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self::new(name, value, type_tag)
    }
}

/// Render attributes as a JSON array string.
pub fn render_json(attrs: &[Attribute]) -> Result<String> {
    serde_json::to_string(attrs)
        .map_err(|e| ConvertError::Other(format!("attribute serialization failed: {e}")))
}

/// Deliver attributes to a sink channel, stamped with `time`.
pub fn deliver_to_sink(
    sink: &mut dyn SeriesSink,
    channel: &str,
    attrs: &[Attribute],
    time: f64,
) -> Result<()> {
    let rendered = render_json(attrs)?;
    sink.set_time(time)?;
    sink.put_text(channel, &rendered)
}

/// Deliver attributes to a file at a deterministic path.
///
/// Parent directories are created as needed. An already-existing file at
/// `path` is a [`ConvertError::MetadataWrite`].
pub fn deliver_to_file(path: &Path, attrs: &[Attribute]) -> Result<()> {
    if path.exists() {
        return Err(ConvertError::metadata_write(
            path.display().to_string(),
            "file already exists",
        ));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ConvertError::metadata_write(path.display().to_string(), e.to_string()))?;
    }
    let rendered = render_json(attrs)?;
    fs::write(path, rendered)
        .map_err(|e| ConvertError::metadata_write(path.display().to_string(), e.to_string()))
}
