use crate::binary::BytesSink;
use crate::error::{CodecError, Result};
use crate::field::{Field, FieldType};
use crate::fields;
use crate::value::SerializedValue;

/// Largest length a variable-length prefix can carry.
pub const MAX_VL_LENGTH: usize = 918_744;

/// Encode a variable-length prefix.
pub fn encode_vl(length: usize) -> Result<Vec<u8>> {
    if length <= 192 {
        Ok(vec![length as u8])
    } else if length <= 12_480 {
        let rem = length - 193;
        Ok(vec![193 + (rem >> 8) as u8, (rem & 0xFF) as u8])
    } else if length <= MAX_VL_LENGTH {
        let rem = length - 12_481;
        Ok(vec![
            241 + (rem >> 16) as u8,
            ((rem >> 8) & 0xFF) as u8,
            (rem & 0xFF) as u8,
        ])
    } else {
        Err(CodecError::LengthOverflow(length))
    }
}

/// Writes fields to a [`BytesSink`] following the wire grammar.
pub struct BinarySerializer<'a, S: BytesSink + ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: BytesSink + ?Sized> BinarySerializer<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Write raw bytes.
    pub fn put(&mut self, bytes: &[u8]) {
        self.sink.put(bytes);
    }

    /// Write a field header.
    pub fn add_field_header(&mut self, field: &Field) -> Result<()> {
        if !field.is_serialized() {
            return Err(CodecError::NotSerialized(field.name()));
        }
        self.sink.put(&field.header());
        Ok(())
    }

    /// Write a length prefix followed by `bytes`.
    pub fn add_length_encoded(&mut self, bytes: &[u8]) -> Result<()> {
        let prefix = encode_vl(bytes.len())?;
        self.sink.put(&prefix);
        self.sink.put(bytes);
        Ok(())
    }

    /// Write one field: header, payload, and the end marker for composites.
    pub fn add(&mut self, field: &Field, value: &SerializedValue) -> Result<()> {
        self.add_field_header(field)?;
        if field.is_vl_encoded() {
            let mut buf = Vec::new();
            value.to_bytes_sink(&mut buf)?;
            self.add_length_encoded(&buf)?;
        } else {
            value.to_bytes_sink(&mut *self.sink)?;
        }
        match field.field_type() {
            FieldType::StObject => self.sink.put(&fields::OBJECT_END_MARKER.header()),
            FieldType::StArray => self.sink.put(&fields::ARRAY_END_MARKER.header()),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hash256;

    #[test]
    fn test_vl_prefix_widths() {
        assert_eq!(encode_vl(0).unwrap(), vec![0]);
        assert_eq!(encode_vl(192).unwrap(), vec![192]);
        assert_eq!(encode_vl(193).unwrap(), vec![193, 0]);
        assert_eq!(encode_vl(12_480).unwrap(), vec![240, 255]);
        assert_eq!(encode_vl(12_481).unwrap(), vec![241, 0, 0]);
        assert_eq!(encode_vl(MAX_VL_LENGTH).unwrap(), vec![254, 212, 23]);
    }

    #[test]
    fn test_vl_overflow() {
        assert!(matches!(
            encode_vl(MAX_VL_LENGTH + 1),
            Err(CodecError::LengthOverflow(918_745))
        ));
    }

    #[test]
    fn test_add_vl_field() {
        let mut out = Vec::new();
        let mut ser = BinarySerializer::new(&mut out);
        let value = SerializedValue::Blob(vec![0xAB, 0xCD].into());
        ser.add(&fields::SIGNING_PUB_KEY, &value).unwrap();
        assert_eq!(out, vec![0x73, 0x02, 0xAB, 0xCD]);
    }

    #[test]
    fn test_add_fixed_field() {
        let mut out = Vec::new();
        let mut ser = BinarySerializer::new(&mut out);
        ser.add(&fields::SEQUENCE, &SerializedValue::Uint32(1)).unwrap();
        assert_eq!(out, vec![0x24, 0, 0, 0, 1]);
    }

    #[test]
    fn test_auxiliary_field_rejected() {
        let mut out = Vec::new();
        let mut ser = BinarySerializer::new(&mut out);
        let value = SerializedValue::Hash256(Hash256::ZERO);
        assert!(matches!(
            ser.add(&fields::INDEX, &value),
            Err(CodecError::NotSerialized("index"))
        ));
        assert!(out.is_empty());
    }
}
