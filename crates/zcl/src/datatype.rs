use std::io::Cursor;

use byteorder::{LE, ReadBytesExt};
use packed_struct::prelude::*;

use crate::error::{ZclError, ZclResult};
use crate::value::Value;

#[derive(PrimitiveEnum_u8, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ZclDataType {
    /** 8-bit value data type */
    Zcl8bit = 0x08,

    /** 16-bit value data type */
    Zcl16bit = 0x09,

    /** 32-bit value data type */
    Zcl32bit = 0x0b,

    /** Boolean data type */
    ZclBool = 0x10,

    /** 8-bit bitmap data type */
    Zcl8bitmap = 0x18,

    /** 16-bit bitmap data type */
    Zcl16bitmap = 0x19,

    /** 32-bit bitmap data type */
    Zcl32bitmap = 0x1b,

    /** Unsigned 8-bit value data type */
    ZclU8 = 0x20,

    /** Unsigned 16-bit value data type */
    ZclU16 = 0x21,

    /** Unsigned 32-bit value data type */
    ZclU32 = 0x23,

    /** Signed 8-bit value data type */
    ZclI8 = 0x28,

    /** Signed 16-bit value data type */
    ZclI16 = 0x29,

    /** Signed 32-bit value data type */
    ZclI32 = 0x2b,

    /** 8-bit enumeration data type */
    ZclE8 = 0x30,

    /** 16-bit enumeration data type */
    ZclE16 = 0x31,
}

/// Wire layout of a fixed-width zcl data type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    pub tag: u8,
    pub name: &'static str,
    pub width: usize,
    pub signed: bool,
    pub bitmap: bool,
}

impl TypeEntry {
    const fn new(tag: ZclDataType, name: &'static str, width: usize) -> Self {
        Self {
            tag: tag as u8,
            name,
            width,
            signed: false,
            bitmap: false,
        }
    }

    const fn signed(mut self) -> Self {
        self.signed = true;
        self
    }

    const fn bitmap(mut self) -> Self {
        self.bitmap = true;
        self
    }

    /// Decode a little-endian value of exactly `self.width` bytes
    pub fn decode(&self, data: &[u8]) -> ZclResult<Value> {
        if data.len() != self.width {
            return Err(ZclError::Truncated {
                stage: "value",
                needed: self.width,
                actual: data.len(),
            });
        }

        let mut rdr = Cursor::new(data);

        let value = match (self.width, self.signed) {
            (1, true) => i64::from(rdr.read_i8()?),
            (2, true) => i64::from(rdr.read_i16::<LE>()?),
            (4, true) => i64::from(rdr.read_i32::<LE>()?),
            (1, false) => i64::from(rdr.read_u8()?),
            (2, false) => i64::from(rdr.read_u16::<LE>()?),
            (4, false) => i64::from(rdr.read_u32::<LE>()?),
            _ => return Ok(Value::Bytes(data.to_vec())),
        };

        Ok(Value::Int(value))
    }
}

impl ZclDataType {
    #[must_use]
    pub const fn entry(self) -> TypeEntry {
        match self {
            Self::Zcl8bit => TypeEntry::new(self, "8BIT", 1).signed(),
            Self::Zcl16bit => TypeEntry::new(self, "16BIT", 2).signed(),
            Self::Zcl32bit => TypeEntry::new(self, "32BIT", 4).signed(),
            Self::ZclBool => TypeEntry::new(self, "BOOL", 1),
            Self::Zcl8bitmap => TypeEntry::new(self, "8BITMAP", 1).bitmap(),
            Self::Zcl16bitmap => TypeEntry::new(self, "16BITMAP", 2).bitmap(),
            Self::Zcl32bitmap => TypeEntry::new(self, "32BITMAP", 4).bitmap(),
            Self::ZclU8 => TypeEntry::new(self, "U8", 1),
            Self::ZclU16 => TypeEntry::new(self, "U16", 2),
            Self::ZclU32 => TypeEntry::new(self, "U32", 4),
            Self::ZclI8 => TypeEntry::new(self, "S8", 1).signed(),
            Self::ZclI16 => TypeEntry::new(self, "S16", 2).signed(),
            Self::ZclI32 => TypeEntry::new(self, "S32", 4).signed(),
            Self::ZclE8 => TypeEntry::new(self, "8BIT_ENUM", 1),
            Self::ZclE16 => TypeEntry::new(self, "16BIT_ENUM", 2),
        }
    }
}

/// Look up the wire layout of a data type tag
pub fn resolve(tag: u8) -> ZclResult<TypeEntry> {
    ZclDataType::from_primitive(tag)
        .map(ZclDataType::entry)
        .ok_or(ZclError::UnknownType(tag))
}

#[cfg(test)]
mod tests {
    use crate::datatype::{ZclDataType, resolve};
    use crate::error::ZclError;
    use crate::value::Value;

    #[test]
    fn resolve_known() {
        let u16 = resolve(0x21).unwrap();
        assert_eq!(u16.name, "U16");
        assert_eq!(u16.width, 2);
        assert!(!u16.signed);

        let b32 = resolve(0x1b).unwrap();
        assert_eq!(b32.width, 4);
        assert!(b32.bitmap);

        assert!(resolve(0x29).unwrap().signed);
    }

    #[test]
    fn resolve_unknown() {
        assert!(matches!(resolve(0x42), Err(ZclError::UnknownType(0x42))));
        assert!(matches!(resolve(0xff), Err(ZclError::UnknownType(0xff))));
    }

    #[test]
    fn tags_match_enum() {
        for tag in 0..=u8::MAX {
            if let Ok(entry) = resolve(tag) {
                assert_eq!(entry.tag, tag);
                assert!(matches!(entry.width, 1 | 2 | 4));
            }
        }
    }

    #[test]
    fn decode_little_endian() {
        let u16 = ZclDataType::ZclU16.entry();
        assert_eq!(u16.decode(&[0x64, 0x00]).unwrap(), Value::Int(100));
        assert_eq!(u16.decode(&[0x00, 0x64]).unwrap(), Value::Int(0x6400));

        let i16 = ZclDataType::ZclI16.entry();
        assert_eq!(i16.decode(&[0xfe, 0xff]).unwrap(), Value::Int(-2));

        let u32 = ZclDataType::ZclU32.entry();
        assert_eq!(
            u32.decode(&[0xff, 0xff, 0xff, 0xff]).unwrap(),
            Value::Int(0xffff_ffff)
        );

        let x8 = ZclDataType::Zcl8bit.entry();
        assert_eq!(x8.decode(&[0x80]).unwrap(), Value::Int(-128));
    }

    #[test]
    fn decode_wrong_width() {
        let u32 = ZclDataType::ZclU32.entry();
        let err = u32.decode(&[0x01, 0x02]).unwrap_err();
        assert_eq!(err.stage(), Some("value"));
    }
}
