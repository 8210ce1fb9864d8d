use packed_struct::prelude::*;
use serde::Serialize;

use zcl::error::ConvertError;
use zcl::value::{Value, serialize_hex};

use crate::datapoint::{DpType, DpValue};
use crate::error::{TuyaError, TuyaResult};
use crate::moes;

/// cmd, seq, dp id, dp type, length
pub const DP_HEADER_SIZE: usize = 6;

/// Size of the heartbeat frame, which carries no datapoint
pub const SHORT_FRAME_SIZE: usize = 2;

#[derive(PrimitiveEnum_u8, Serialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum TuyaCommand {
    Status = 0x00,
    GetData = 0x01,
    SetData = 0x02,
    Reset = 0x03,
    SetDp = 0x04,
    QueryDp = 0x05,
}

#[derive(PackedStruct, Debug, Clone, Copy)]
#[packed_struct(endian = "msb", bit_numbering = "msb0")]
struct DpHeader {
    #[packed_field(bytes = "0")]
    cmd: u8,

    #[packed_field(bytes = "1")]
    seq: u8,

    #[packed_field(bytes = "2")]
    dp_id: u8,

    #[packed_field(bytes = "3")]
    dtype: u8,

    #[packed_field(bytes = "4..=5")]
    len: u16,
}

/// Heartbeat: `[seq][cmd]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShortDpFrame {
    pub seq: u8,
    pub cmd: u8,
}

impl ShortDpFrame {
    #[must_use]
    pub fn command(&self) -> Option<TuyaCommand> {
        TuyaCommand::from_primitive(self.cmd)
    }
}

/// A single datapoint report: `[cmd][seq][dp id][dp type][len:u16 BE][value]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedDp {
    pub cmd: u8,
    pub seq: u8,
    pub dp_id: u8,
    pub dtype: DpType,
    pub len: u16,
    #[serde(serialize_with = "serialize_hex")]
    pub raw: Vec<u8>,
    pub value: DpValue,
    pub formatted: Value,
    pub name: String,

    /// Set when the registry formatting failed, and `formatted` fell back to
    /// the decoded value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_error: Option<ConvertError>,
}

impl DecodedDp {
    #[must_use]
    pub fn command(&self) -> Option<TuyaCommand> {
        TuyaCommand::from_primitive(self.cmd)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "frame", rename_all = "snake_case")]
pub enum TuyaFrame {
    Short(ShortDpFrame),
    Datapoint(DecodedDp),
}

impl TuyaFrame {
    pub fn parse(data: &[u8]) -> TuyaResult<Self> {
        if data.len() < SHORT_FRAME_SIZE {
            return Err(TuyaError::Truncated {
                stage: "frame",
                needed: SHORT_FRAME_SIZE,
                actual: data.len(),
            });
        }

        if data.len() == SHORT_FRAME_SIZE {
            return Ok(Self::Short(ShortDpFrame {
                seq: data[0],
                cmd: data[1],
            }));
        }

        if data.len() < DP_HEADER_SIZE {
            return Err(TuyaError::Truncated {
                stage: "header",
                needed: DP_HEADER_SIZE,
                actual: data.len(),
            });
        }

        let (hdr, data) = data.split_at(DP_HEADER_SIZE);
        let hdr = DpHeader::unpack_from_slice(hdr)?;

        if data.len() != usize::from(hdr.len) {
            return Err(TuyaError::Truncated {
                stage: "payload",
                needed: DP_HEADER_SIZE + usize::from(hdr.len),
                actual: DP_HEADER_SIZE + data.len(),
            });
        }

        let dtype = DpType::from_primitive(hdr.dtype).ok_or(TuyaError::UnknownDataType(hdr.dtype))?;
        let value = DpValue::parse(dtype, data)?;

        let mut res = DecodedDp {
            cmd: hdr.cmd,
            seq: hdr.seq,
            dp_id: hdr.dp_id,
            dtype,
            len: hdr.len,
            raw: data.to_vec(),
            formatted: Value::from(&value),
            value,
            name: format!("unknown_dp_{}", hdr.dp_id),
            conversion_error: None,
        };

        if let Some(desc) = moes::describe(hdr.dp_id) {
            res.name = desc.name.to_string();
            match desc.format(&res.value) {
                Ok(formatted) => res.formatted = formatted,
                Err(err) => {
                    log::debug!("Datapoint {} ({}): {err}", hdr.dp_id, desc.name);
                    res.conversion_error = Some(err);
                }
            }
        }

        Ok(Self::Datapoint(res))
    }
}
