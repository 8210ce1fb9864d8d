use std::num::ParseIntError;

use thiserror::Error;

use tuya::error::TuyaError;
use zcl::error::ZclError;

#[derive(Error, Debug)]
pub enum ApiError {
    /* mapped errors */
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    ParseIntError(#[from] ParseIntError),

    #[error(transparent)]
    FromHexError(#[from] hex::FromHexError),

    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),

    #[error(transparent)]
    SetLoggerError(#[from] log::SetLoggerError),

    #[error(transparent)]
    StdinError(#[from] clap_stdin::StdinError),

    #[error(transparent)]
    ZclError(#[from] ZclError),

    #[error(transparent)]
    TuyaError(#[from] TuyaError),

    /* replay errors */
    #[error("Unknown message kind: {0:?}")]
    UnknownMessageKind(String),

    #[error("Malformed message line: {0:?}")]
    MalformedLine(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
