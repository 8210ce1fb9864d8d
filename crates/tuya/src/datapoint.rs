use std::fmt::{self, Display};
use std::io::Cursor;

use byteorder::{BE, ReadBytesExt};
use packed_struct::prelude::*;
use serde::Serialize;

use zcl::value::{Value, serialize_hex};

use crate::error::{TuyaError, TuyaResult};

#[derive(PrimitiveEnum_u8, Serialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DpType {
    Raw = 0x00,
    Bool = 0x01,
    Value = 0x02,
    String = 0x03,
    Enum = 0x04,
    Bitmap = 0x05,
}

/// A datapoint value, decoded according to its wire type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DpValue {
    Raw(#[serde(serialize_with = "serialize_hex")] Vec<u8>),
    Bool(bool),
    Value(i32),
    String(String),
    Enum(u8),
    Bitmap(u32),
}

fn require_width(data: &[u8], width: usize, err: &'static str) -> TuyaResult<()> {
    if data.len() == width {
        Ok(())
    } else {
        Err(TuyaError::Malformed(err))
    }
}

fn first_byte(data: &[u8], stage: &'static str) -> TuyaResult<u8> {
    data.first().copied().ok_or(TuyaError::Truncated {
        stage,
        needed: 1,
        actual: 0,
    })
}

impl DpValue {
    /// Decode a datapoint payload. Numbers are big-endian.
    pub fn parse(dtype: DpType, data: &[u8]) -> TuyaResult<Self> {
        let res = match dtype {
            DpType::Raw => Self::Raw(data.to_vec()),
            DpType::Bool => Self::Bool(first_byte(data, "bool")? != 0),
            DpType::Value => {
                require_width(data, 4, "value-width")?;
                Self::Value(Cursor::new(data).read_i32::<BE>()?)
            }
            DpType::String => Self::String(
                String::from_utf8(data.to_vec()).map_err(|_| TuyaError::Malformed("utf8"))?,
            ),
            DpType::Enum => Self::Enum(first_byte(data, "enum")?),
            DpType::Bitmap => {
                require_width(data, 4, "bitmap-width")?;
                Self::Bitmap(Cursor::new(data).read_u32::<BE>()?)
            }
        };

        Ok(res)
    }

    #[must_use]
    pub const fn dtype(&self) -> DpType {
        match self {
            Self::Raw(_) => DpType::Raw,
            Self::Bool(_) => DpType::Bool,
            Self::Value(_) => DpType::Value,
            Self::String(_) => DpType::String,
            Self::Enum(_) => DpType::Enum,
            Self::Bitmap(_) => DpType::Bitmap,
        }
    }
}

impl From<&DpValue> for Value {
    fn from(value: &DpValue) -> Self {
        match value {
            DpValue::Raw(data) => Self::Bytes(data.clone()),
            DpValue::Bool(val) => Self::Bool(*val),
            DpValue::Value(val) => Self::Int(i64::from(*val)),
            DpValue::String(val) => Self::Text(val.clone()),
            DpValue::Enum(val) => Self::Int(i64::from(*val)),
            DpValue::Bitmap(val) => Self::Int(i64::from(*val)),
        }
    }
}

impl Display for DpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&Value::from(self), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::datapoint::{DpType, DpValue};
    use crate::error::TuyaError;

    #[test]
    fn parse_value() {
        assert_eq!(
            DpValue::parse(DpType::Value, &[0x00, 0x00, 0x00, 0xe1]).unwrap(),
            DpValue::Value(225)
        );
        assert_eq!(
            DpValue::parse(DpType::Value, &[0xff, 0xff, 0xff, 0xec]).unwrap(),
            DpValue::Value(-20)
        );
    }

    #[test]
    fn parse_value_width() {
        let cases: [&[u8]; 2] = [&[0x01, 0x02], &[0, 0, 0, 0, 1]];
        for data in cases {
            let err = DpValue::parse(DpType::Value, data).unwrap_err();
            assert!(matches!(err, TuyaError::Malformed("value-width")));
        }
    }

    #[test]
    fn parse_bool() {
        assert_eq!(
            DpValue::parse(DpType::Bool, &[0x02]).unwrap(),
            DpValue::Bool(true)
        );
        assert_eq!(
            DpValue::parse(DpType::Bool, &[0x00]).unwrap(),
            DpValue::Bool(false)
        );
        let err = DpValue::parse(DpType::Bool, &[]).unwrap_err();
        assert_eq!(err.stage(), Some("bool"));
    }

    #[test]
    fn parse_string() {
        assert_eq!(
            DpValue::parse(DpType::String, b"eco").unwrap(),
            DpValue::String("eco".to_string())
        );
        let err = DpValue::parse(DpType::String, &[0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, TuyaError::Malformed("utf8")));
    }

    #[test]
    fn parse_enum_and_bitmap() {
        assert_eq!(
            DpValue::parse(DpType::Enum, &[0x66]).unwrap(),
            DpValue::Enum(102)
        );
        assert_eq!(
            DpValue::parse(DpType::Bitmap, &[0x80, 0x00, 0x00, 0x01]).unwrap(),
            DpValue::Bitmap(0x8000_0001)
        );
        assert!(matches!(
            DpValue::parse(DpType::Bitmap, &[0x01]),
            Err(TuyaError::Malformed("bitmap-width"))
        ));
    }

    #[test]
    fn parse_empty_enum() {
        let err = DpValue::parse(DpType::Enum, &[]).unwrap_err();
        assert!(matches!(
            err,
            TuyaError::Truncated {
                stage: "enum",
                needed: 1,
                actual: 0
            }
        ));
    }

    #[test]
    fn parse_raw() {
        let value = DpValue::parse(DpType::Raw, &[0x06, 0x00, 0x14]).unwrap();
        assert_eq!(value, DpValue::Raw(vec![0x06, 0x00, 0x14]));
        assert_eq!(value.dtype(), DpType::Raw);
        assert_eq!(value.to_string(), "060014");
    }
}
