use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZclError {
    /* mapped errors */
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    PackedStructError(#[from] packed_struct::PackingError),

    #[error("Unknown zcl data type {0:#04x}")]
    UnknownType(u8),

    #[error("Truncated {stage}: need {needed} bytes, got {actual}")]
    Truncated {
        stage: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("Truncated value of attribute {attr_id:#06x} ({type_name}): need {needed} bytes, got {actual}")]
    TruncatedValue {
        attr_id: u16,
        type_name: String,
        needed: usize,
        actual: usize,
    },
}

impl ZclError {
    /// Name of the decoding stage that ran out of input, if this is a
    /// truncation error.
    #[must_use]
    pub const fn stage(&self) -> Option<&'static str> {
        match self {
            Self::Truncated { stage, .. } => Some(*stage),
            Self::TruncatedValue { .. } => Some("value"),
            _ => None,
        }
    }
}

/// Failure of a descriptor conversion rule. Never escapes a decoder; it is
/// recorded next to the fallback value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ConvertError {
    #[error("Cannot scale non-numeric value {0}")]
    NotNumeric(String),

    #[error("Cannot use {0} as a bitmask")]
    NotBitmask(String),

    #[error("Cannot look up {0} in enum table")]
    NotEnumCode(String),
}

pub type ZclResult<T> = Result<T, ZclError>;
