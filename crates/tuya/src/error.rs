use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuyaError {
    /* mapped errors */
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    PackedStructError(#[from] packed_struct::PackingError),

    #[error("Truncated {stage}: expected {needed} bytes, got {actual}")]
    Truncated {
        stage: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("Malformed datapoint value: {0}")]
    Malformed(&'static str),

    #[error("Unknown datapoint type {0:#04x}")]
    UnknownDataType(u8),
}

impl TuyaError {
    #[must_use]
    pub const fn stage(&self) -> Option<&'static str> {
        match self {
            Self::Truncated { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type TuyaResult<T> = Result<T, TuyaError>;
