// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Compound layout descriptors as reported by a container backend.
//!
//! These types describe what the container says about a dataset's element
//! type and shape. They are inputs to schema inspection; no byte copying or
//! reordering happens at this level.

use serde::{Deserialize, Serialize};

/// Native class of a compound member, as reported by the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberClass {
    /// IEEE floating point
    Float,
    /// Fixed-width integer
    Integer,
}

/// One member of a compound element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundMember {
    /// Member name as stored in the container
    pub name: String,
    /// Native class
    pub class: MemberClass,
    /// Byte width of the member
    pub byte_size: usize,
    /// Byte offset of the member within one element
    pub byte_offset: usize,
    /// Whether an integer member is signed (ignored for floats)
    pub signed: bool,
}

/// Compound element type descriptor: ordered members plus total stride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundLayout {
    /// Members in declaration order
    pub members: Vec<CompoundMember>,
    /// Total byte size of one element (the decode stride)
    pub element_size: usize,
}

/// Dataspace shape of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataspace {
    /// Per-dimension extents; rank is `dims.len()`
    pub dims: Vec<u64>,
}

impl Dataspace {
    /// Create a rank-1 dataspace.
    pub fn flat(len: u64) -> Self {
        Self { dims: vec![len] }
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Element count of a rank-1 dataspace.
    pub fn len(&self) -> u64 {
        self.dims.first().copied().unwrap_or(0)
    }

    /// Check if the dataspace holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Semantic type of a compound member.
///
/// The fixed set of (class, width, signedness) combinations this converter
/// understands. Anything else rejects the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    Float64,
    Float32,
    Int64,
    UInt64,
    Int32,
    UInt32,
    Int16,
    UInt16,
}

impl SemanticType {
    /// Map a member's (class, byte width, signedness) to a semantic type.
    ///
    /// Returns `None` for unmapped combinations (e.g. 1-byte integers or
    /// 2-byte floats), which rejects the dataset.
    pub fn classify(class: MemberClass, byte_size: usize, signed: bool) -> Option<Self> {
        match (class, byte_size) {
            (MemberClass::Float, 8) => Some(SemanticType::Float64),
            (MemberClass::Float, 4) => Some(SemanticType::Float32),
            (MemberClass::Integer, 8) => Some(if signed {
                SemanticType::Int64
            } else {
                SemanticType::UInt64
            }),
            (MemberClass::Integer, 4) => Some(if signed {
                SemanticType::Int32
            } else {
                SemanticType::UInt32
            }),
            (MemberClass::Integer, 2) => Some(if signed {
                SemanticType::Int16
            } else {
                SemanticType::UInt16
            }),
            _ => None,
        }
    }

    /// Byte width of the semantic type.
    pub fn byte_size(&self) -> usize {
        match self {
            SemanticType::Float64 | SemanticType::Int64 | SemanticType::UInt64 => 8,
            SemanticType::Float32 | SemanticType::Int32 | SemanticType::UInt32 => 4,
            SemanticType::Int16 | SemanticType::UInt16 => 2,
        }
    }

    /// Check if this is an unsigned integer type.
    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            SemanticType::UInt64 | SemanticType::UInt32 | SemanticType::UInt16
        )
    }

    /// Human-readable name, used in diagnostics and `inspect` output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Float64 => "float64",
            SemanticType::Float32 => "float32",
            SemanticType::Int64 => "int64",
            SemanticType::UInt64 => "uint64",
            SemanticType::Int32 => "int32",
            SemanticType::UInt32 => "uint32",
            SemanticType::Int16 => "int16",
            SemanticType::UInt16 => "uint16",
        }
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_floats() {
        assert_eq!(
            SemanticType::classify(MemberClass::Float, 8, true),
            Some(SemanticType::Float64)
        );
        assert_eq!(
            SemanticType::classify(MemberClass::Float, 4, false),
            Some(SemanticType::Float32)
        );
    }

    #[test]
    fn test_classify_integers() {
        assert_eq!(
            SemanticType::classify(MemberClass::Integer, 8, true),
            Some(SemanticType::Int64)
        );
        assert_eq!(
            SemanticType::classify(MemberClass::Integer, 8, false),
            Some(SemanticType::UInt64)
        );
        assert_eq!(
            SemanticType::classify(MemberClass::Integer, 4, false),
            Some(SemanticType::UInt32)
        );
        assert_eq!(
            SemanticType::classify(MemberClass::Integer, 2, true),
            Some(SemanticType::Int16)
        );
    }

    #[test]
    fn test_classify_unmapped() {
        assert_eq!(SemanticType::classify(MemberClass::Integer, 1, true), None);
        assert_eq!(SemanticType::classify(MemberClass::Float, 2, true), None);
        assert_eq!(SemanticType::classify(MemberClass::Float, 16, true), None);
    }

    #[test]
    fn test_byte_size() {
        assert_eq!(SemanticType::Float64.byte_size(), 8);
        assert_eq!(SemanticType::UInt32.byte_size(), 4);
        assert_eq!(SemanticType::Int16.byte_size(), 2);
    }

    #[test]
    fn test_is_unsigned() {
        assert!(SemanticType::UInt16.is_unsigned());
        assert!(!SemanticType::Int16.is_unsigned());
        assert!(!SemanticType::Float32.is_unsigned());
    }

    #[test]
    fn test_dataspace() {
        let space = Dataspace::flat(42);
        assert_eq!(space.rank(), 1);
        assert_eq!(space.len(), 42);
        assert!(!space.is_empty());

        let matrix = Dataspace {
            dims: vec![4, 4],
        };
        assert_eq!(matrix.rank(), 2);
    }
}
