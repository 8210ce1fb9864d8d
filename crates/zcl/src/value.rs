use std::fmt::{self, Display};

use itertools::Itertools;
use serde::{Serialize, Serializer};

/// A decoded reading, either straight off the wire or after a descriptor
/// conversion has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Labels(Vec<&'static str>),
    Bytes(#[serde(serialize_with = "serialize_hex")] Vec<u8>),
}

impl Value {
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(val) => Some(*val),
            Self::Bool(val) => Some(i64::from(*val)),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(val) => Some(*val),
            Self::Int(val) => Some(*val as f64),
            Self::Bool(val) => Some(f64::from(u8::from(*val))),
            _ => None,
        }
    }

    /// Truthiness, as a device would interpret the value
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(val) => *val,
            Self::Int(val) => *val != 0,
            Self::Float(val) => *val != 0.0,
            Self::Text(val) => !val.is_empty(),
            Self::Labels(val) => !val.is_empty(),
            Self::Bytes(val) => !val.is_empty(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(val) => write!(f, "{val}"),
            Self::Int(val) => write!(f, "{val}"),
            Self::Float(val) => {
                /* whole numbers keep one decimal: 50.0, not 50 */
                let text = val.to_string();
                if text.bytes().all(|c| c.is_ascii_digit() || c == b'-') {
                    write!(f, "{text}.0")
                } else {
                    write!(f, "{text}")
                }
            }
            Self::Text(val) => write!(f, "{val}"),
            Self::Labels(val) => write!(f, "[{}]", val.iter().join(", ")),
            Self::Bytes(val) => write!(f, "{}", hex::encode(val)),
        }
    }
}

pub fn serialize_hex<S: Serializer>(data: impl AsRef<[u8]>, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&hex::encode(data))
}
