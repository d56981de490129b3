// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema inspection for compound time/value datasets.
//!
//! Validates a dataset's compound layout and dataspace, in order:
//! rank must be 1, the element type must have exactly 2 members, each
//! member's (class, width, signedness) must map to a semantic type, member 0
//! must be named "time" and member 1 "data" or "value" (case-insensitive).
//! Any failure rejects the dataset; the run continues with the rest.

use crate::core::{ConvertError, Result};

use super::layout::{CompoundLayout, CompoundMember, Dataspace, SemanticType};

/// Validated specification of one compound field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Member name as stored in the container
    pub name: String,
    /// Classified semantic type
    pub semantic: SemanticType,
    /// Byte width
    pub byte_size: usize,
    /// Byte offset within one element
    pub byte_offset: usize,
}

/// Validated schema of a convertible dataset.
///
/// Offsets and sizes are taken verbatim from the container's layout
/// descriptor and used as-is by the record decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSchema {
    /// The time field (member 0)
    pub time: FieldSpec,
    /// The value field (member 1)
    pub value: FieldSpec,
    /// Decode stride: total byte size of one compound element
    pub element_size: usize,
}

/// Validates and classifies dataset compound layouts.
pub struct SchemaInspector;

impl SchemaInspector {
    /// Inspect a dataset's layout and dataspace.
    ///
    /// Returns a [`DatasetSchema`] on success. Failures are skip-class
    /// errors: [`ConvertError::Schema`] for rank/member-count/name
    /// violations, [`ConvertError::Decode`] for unmapped member native
    /// types.
    pub fn inspect(
        dataset: &str,
        layout: &CompoundLayout,
        space: &Dataspace,
    ) -> Result<DatasetSchema> {
        if space.rank() != 1 {
            return Err(ConvertError::schema(
                dataset,
                format!("rank is {}, expected 1", space.rank()),
            ));
        }

        if layout.members.len() != 2 {
            return Err(ConvertError::schema(
                dataset,
                format!(
                    "compound type has {} members, expected 2",
                    layout.members.len()
                ),
            ));
        }

        let time = Self::classify_field(dataset, &layout.members[0])?;
        let value = Self::classify_field(dataset, &layout.members[1])?;

        // Member 0 must be "time", member 1 "data" or "value".
        if !time.name.eq_ignore_ascii_case("time") {
            return Err(ConvertError::schema(
                dataset,
                format!("first member is '{}', expected 'time'", time.name),
            ));
        }
        if !value.name.eq_ignore_ascii_case("data") && !value.name.eq_ignore_ascii_case("value") {
            return Err(ConvertError::schema(
                dataset,
                format!(
                    "second member is '{}', expected 'data' or 'value'",
                    value.name
                ),
            ));
        }

        Ok(DatasetSchema {
            time,
            value,
            element_size: layout.element_size,
        })
    }

    fn classify_field(dataset: &str, member: &CompoundMember) -> Result<FieldSpec> {
        let semantic = SemanticType::classify(member.class, member.byte_size, member.signed)
            .ok_or_else(|| {
                ConvertError::decode(
                    dataset,
                    format!(
                        "member '{}' has unrecognized native type ({:?}, {} bytes)",
                        member.name, member.class, member.byte_size
                    ),
                )
            })?;
        Ok(FieldSpec {
            name: member.name.clone(),
            semantic,
            byte_size: member.byte_size,
            byte_offset: member.byte_offset,
        })
    }
}
