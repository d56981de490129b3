// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-stride compound record decoding.
//!
//! Slices each element's two field sub-ranges at their validated offsets and
//! decodes them little-endian per semantic type. The time field is always
//! widened to f64; the value field keeps its semantic tag so the emitter can
//! pick the sink suffix. Decoding is pure: no I/O, no shared state.

use byteorder::{ByteOrder, LittleEndian};

use crate::core::{ConvertError, DecodedSample, Result, SampleValue};
use crate::schema::{DatasetSchema, FieldSpec, SemanticType};

/// Decodes a dataset's raw byte array into typed samples.
pub struct RecordDecoder;

impl RecordDecoder {
    /// Decode all compound elements in `raw`.
    ///
    /// `channel` is the dataset's leaf name and is carried into every
    /// sample. The element count is `raw.len() / stride`; trailing bytes
    /// that do not form a whole element are a decode error.
    pub fn decode(channel: &str, raw: &[u8], schema: &DatasetSchema) -> Result<Vec<DecodedSample>> {
        let stride = schema.element_size;
        if stride == 0 {
            return Err(ConvertError::decode(channel, "element size is 0"));
        }
        if raw.len() % stride != 0 {
            return Err(ConvertError::decode(
                channel,
                format!(
                    "buffer length {} is not a multiple of element size {}",
                    raw.len(),
                    stride
                ),
            ));
        }

        let count = raw.len() / stride;
        let mut samples = Vec::with_capacity(count);
        for i in 0..count {
            let base = i * stride;
            let time = Self::decode_time(raw, base, &schema.time)?;
            let value = Self::decode_value(raw, base, &schema.value)?;
            samples.push(DecodedSample::new(channel, time, value));
        }
        Ok(samples)
    }

    /// Slice one field's sub-range out of the buffer, bounds-checked.
    fn field_slice<'a>(raw: &'a [u8], base: usize, field: &FieldSpec) -> Result<&'a [u8]> {
        let start = base + field.byte_offset;
        let end = start + field.byte_size;
        if end > raw.len() {
            return Err(ConvertError::buffer_too_short(
                field.byte_size,
                raw.len().saturating_sub(start),
                start,
            ));
        }
        Ok(&raw[start..end])
    }

    /// Decode the time field, widened to f64 regardless of native width.
    fn decode_time(raw: &[u8], base: usize, field: &FieldSpec) -> Result<f64> {
        let bytes = Self::field_slice(raw, base, field)?;
        let time = match field.semantic {
            SemanticType::Float64 => LittleEndian::read_f64(bytes),
            SemanticType::Float32 => LittleEndian::read_f32(bytes) as f64,
            SemanticType::Int64 | SemanticType::UInt64 => LittleEndian::read_i64(bytes) as f64,
            SemanticType::Int32 | SemanticType::UInt32 => LittleEndian::read_i32(bytes) as f64,
            SemanticType::Int16 | SemanticType::UInt16 => LittleEndian::read_i16(bytes) as f64,
        };
        Ok(time)
    }

    /// Decode the value field, keeping its semantic tag.
    ///
    /// Unsigned types intentionally reinterpret as signed of the same
    /// width, with no range check.
    fn decode_value(raw: &[u8], base: usize, field: &FieldSpec) -> Result<SampleValue> {
        let bytes = Self::field_slice(raw, base, field)?;
        let value = match field.semantic {
            SemanticType::Float64 => SampleValue::Float64(LittleEndian::read_f64(bytes)),
            SemanticType::Float32 => SampleValue::Float32(LittleEndian::read_f32(bytes)),
            SemanticType::Int64 | SemanticType::UInt64 => {
                SampleValue::Int64(LittleEndian::read_i64(bytes))
            }
            SemanticType::Int32 | SemanticType::UInt32 => {
                SampleValue::Int32(LittleEndian::read_i32(bytes))
            }
            SemanticType::Int16 | SemanticType::UInt16 => {
                SampleValue::Int16(LittleEndian::read_i16(bytes))
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CompoundLayout, CompoundMember, Dataspace, MemberClass, SchemaInspector};

    fn schema(value_class: MemberClass, value_size: usize, signed: bool) -> DatasetSchema {
        let layout = CompoundLayout {
            members: vec![
                CompoundMember {
                    name: "time".to_string(),
                    class: MemberClass::Float,
                    byte_size: 8,
                    byte_offset: 0,
                    signed: true,
                },
                CompoundMember {
                    name: "value".to_string(),
                    class: value_class,
                    byte_size: value_size,
                    byte_offset: 8,
                    signed,
                },
            ],
            element_size: 8 + value_size,
        };
        SchemaInspector::inspect("chan", &layout, &Dataspace::flat(0)).unwrap()
    }

    #[test]
    fn test_decode_f64_f32_records() {
        let schema = schema(MemberClass::Float, 4, true);
        let mut raw = Vec::new();
        for (t, v) in [(1.0f64, 1.5f32), (2.0, -2.5)] {
            raw.extend_from_slice(&t.to_le_bytes());
            raw.extend_from_slice(&v.to_le_bytes());
        }

        let samples = RecordDecoder::decode("chan1", &raw, &schema).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].channel, "chan1");
        assert_eq!(samples[0].time, 1.0);
        assert_eq!(samples[0].value, SampleValue::Float32(1.5));
        assert_eq!(samples[1].value, SampleValue::Float32(-2.5));
    }

    #[test]
    fn test_integer_time_widened_to_f64() {
        let layout = CompoundLayout {
            members: vec![
                CompoundMember {
                    name: "time".to_string(),
                    class: MemberClass::Integer,
                    byte_size: 4,
                    byte_offset: 0,
                    signed: true,
                },
                CompoundMember {
                    name: "value".to_string(),
                    class: MemberClass::Float,
                    byte_size: 8,
                    byte_offset: 4,
                    signed: true,
                },
            ],
            element_size: 12,
        };
        let schema = SchemaInspector::inspect("chan", &layout, &Dataspace::flat(1)).unwrap();

        let mut raw = Vec::new();
        raw.extend_from_slice(&42i32.to_le_bytes());
        raw.extend_from_slice(&9.5f64.to_le_bytes());

        let samples = RecordDecoder::decode("chan1", &raw, &schema).unwrap();
        assert_eq!(samples[0].time, 42.0);
        assert_eq!(samples[0].value, SampleValue::Float64(9.5));
    }

    #[test]
    fn test_unsigned_value_reinterpreted_as_signed() {
        let schema = schema(MemberClass::Integer, 2, false);
        let mut raw = Vec::new();
        raw.extend_from_slice(&0.0f64.to_le_bytes());
        raw.extend_from_slice(&0xFFFFu16.to_le_bytes());

        let samples = RecordDecoder::decode("chan1", &raw, &schema).unwrap();
        // u16::MAX appears as -1; documented truncation, not corrected.
        assert_eq!(samples[0].value, SampleValue::Int16(-1));
    }

    #[test]
    fn test_respects_offsets_with_padding() {
        // Element with 4 bytes of padding between the fields.
        let layout = CompoundLayout {
            members: vec![
                CompoundMember {
                    name: "time".to_string(),
                    class: MemberClass::Float,
                    byte_size: 8,
                    byte_offset: 0,
                    signed: true,
                },
                CompoundMember {
                    name: "data".to_string(),
                    class: MemberClass::Integer,
                    byte_size: 4,
                    byte_offset: 12,
                    signed: true,
                },
            ],
            element_size: 16,
        };
        let schema = SchemaInspector::inspect("chan", &layout, &Dataspace::flat(1)).unwrap();

        let mut raw = Vec::new();
        raw.extend_from_slice(&3.0f64.to_le_bytes());
        raw.extend_from_slice(&[0xAA; 4]);
        raw.extend_from_slice(&7i32.to_le_bytes());

        let samples = RecordDecoder::decode("chan1", &raw, &schema).unwrap();
        assert_eq!(samples[0].time, 3.0);
        assert_eq!(samples[0].value, SampleValue::Int32(7));
    }

    #[test]
    fn test_empty_buffer_yields_no_samples() {
        let schema = schema(MemberClass::Float, 8, true);
        let samples = RecordDecoder::decode("chan1", &[], &schema).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let schema = schema(MemberClass::Float, 8, true);
        let raw = vec![0u8; 17];
        let err = RecordDecoder::decode("chan1", &raw, &schema).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
        assert!(!err.is_fatal());
    }
}
