// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Compound layout descriptors and schema inspection.
//!
//! A container backend reports each dataset's compound element layout and
//! dataspace shape; [`SchemaInspector`] validates that the dataset is a flat
//! array of 2-member {time, data|value} records over the supported semantic
//! types and produces the [`DatasetSchema`] the record decoder consumes.

pub mod inspector;
pub mod layout;

pub use inspector::{DatasetSchema, FieldSpec, SchemaInspector};
pub use layout::{CompoundLayout, CompoundMember, Dataspace, MemberClass, SemanticType};
