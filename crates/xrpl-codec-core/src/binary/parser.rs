use crate::error::{CodecError, Result};
use crate::binary::MAX_VL_LENGTH;
use crate::field::{Field, FieldRegistry};

/// Cursor over an immutable byte slice.
pub struct BinaryParser<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> BinaryParser<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Total length of the underlying buffer.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Current offset.
    pub fn pos(&self) -> usize {
        self.cursor
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }

    /// True once the cursor reaches the end of the buffer or the absolute
    /// offset `limit`, whichever comes first.
    pub fn end(&self, limit: Option<usize>) -> bool {
        self.cursor >= self.bytes.len() || limit.map_or(false, |l| self.cursor >= l)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.read(1)?;
        Ok(bytes[0])
    }

    /// Read `n` bytes and advance.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(CodecError::TruncatedInput {
                offset: self.cursor,
                needed: n,
                available: self.remaining(),
            });
        }
        let out = &self.bytes[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(out)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read(n).map(|_| ())
    }

    /// Peek at the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    /// Decode a field header into `(type code, nth)`.
    pub fn read_field_code(&mut self) -> Result<(i32, i32)> {
        let tag = self.read_u8()?;
        let mut type_code = (tag >> 4) as i32;
        let mut nth = (tag & 0x0F) as i32;
        if type_code == 0 {
            type_code = self.read_u8()? as i32;
            if type_code < 16 {
                return Err(CodecError::MalformedInput(format!(
                    "uncommon type code {} below 16",
                    type_code
                )));
            }
        }
        if nth == 0 {
            nth = self.read_u8()? as i32;
            if nth < 16 {
                return Err(CodecError::MalformedInput(format!(
                    "uncommon field ordinal {} below 16",
                    nth
                )));
            }
        }
        Ok((type_code, nth))
    }

    /// Decode a field header and resolve it in the global registry.
    pub fn read_field(&mut self) -> Result<Field> {
        let (type_code, nth) = self.read_field_code()?;
        FieldRegistry::global().by_code(type_code, nth)
    }

    /// Decode a variable-length prefix.
    pub fn read_vl_length(&mut self) -> Result<usize> {
        let b1 = self.read_u8()? as usize;
        match b1 {
            0..=192 => Ok(b1),
            193..=240 => {
                let b2 = self.read_u8()? as usize;
                Ok(193 + (b1 - 193) * 256 + b2)
            }
            241..=254 => {
                let b2 = self.read_u8()? as usize;
                let b3 = self.read_u8()? as usize;
                let length = 12481 + (b1 - 241) * 65536 + b2 * 256 + b3;
                if length > MAX_VL_LENGTH {
                    return Err(CodecError::LengthOverflow(length));
                }
                Ok(length)
            }
            _ => Err(CodecError::LengthOverflow(b1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::encode_vl;
    use crate::fields;

    #[test]
    fn test_read_past_end_is_truncated() {
        let mut parser = BinaryParser::new(&[1, 2]);
        assert_eq!(parser.read_u8().unwrap(), 1);
        assert!(matches!(
            parser.read(2),
            Err(CodecError::TruncatedInput { offset: 1, needed: 2, available: 1 })
        ));
    }

    #[test]
    fn test_end_with_limit() {
        let mut parser = BinaryParser::new(&[0; 8]);
        parser.skip(3).unwrap();
        assert!(!parser.end(None));
        assert!(parser.end(Some(3)));
        assert!(!parser.end(Some(4)));
    }

    #[test]
    fn test_field_header_roundtrip_for_catalog() {
        for field in FieldRegistry::global().fields() {
            if !field.is_serialized() {
                continue;
            }
            let header = field.header();
            let mut parser = BinaryParser::new(&header);
            let decoded = parser.read_field().unwrap();
            assert_eq!(decoded, field, "{}", field);
            assert!(parser.end(None));
        }
    }

    #[test]
    fn test_read_uncommon_header() {
        let mut parser = BinaryParser::new(&[0x20, 16]);
        assert_eq!(parser.read_field().unwrap(), fields::HIGH_QUALITY_IN);
    }

    #[test]
    fn test_unknown_code() {
        let mut parser = BinaryParser::new(&[0x9F]);
        assert!(matches!(
            parser.read_field(),
            Err(CodecError::UnknownFieldCode { type_code: 9, nth: 15 })
        ));
    }

    #[test]
    fn test_vl_length_boundaries() {
        for n in [0usize, 1, 192, 193, 12480, 12481, 918744] {
            let prefix = encode_vl(n).unwrap();
            let mut parser = BinaryParser::new(&prefix);
            assert_eq!(parser.read_vl_length().unwrap(), n);
            assert!(parser.end(None));
        }
    }

    #[test]
    fn test_vl_length_above_max_overflows() {
        for prefix in [[0xFE, 0xD4, 0x18], [0xFE, 0xFF, 0xFF]] {
            let mut parser = BinaryParser::new(&prefix);
            assert!(matches!(
                parser.read_vl_length(),
                Err(CodecError::LengthOverflow(n)) if n > MAX_VL_LENGTH
            ));
        }
    }

    #[test]
    fn test_vl_lead_byte_255_overflows() {
        let mut parser = BinaryParser::new(&[0xFF, 0, 0]);
        assert!(matches!(
            parser.read_vl_length(),
            Err(CodecError::LengthOverflow(_))
        ));
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::binary::{encode_vl, MAX_VL_LENGTH};

    proptest! {
        #[test]
        fn test_vl_length_roundtrip(n in 0..=MAX_VL_LENGTH) {
            let prefix = encode_vl(n).unwrap();
            let mut parser = BinaryParser::new(&prefix);
            prop_assert_eq!(parser.read_vl_length().unwrap(), n);
            prop_assert!(parser.end(None));
        }

        #[test]
        fn test_short_reads_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..8), n in 0usize..16) {
            let mut parser = BinaryParser::new(&bytes);
            match parser.read(n) {
                Ok(read) => prop_assert_eq!(read.len(), n),
                Err(e) => {
                    let truncated = matches!(e, CodecError::TruncatedInput { .. });
                    prop_assert!(truncated);
                }
            }
        }
    }
}
