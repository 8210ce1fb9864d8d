use std::fmt::{self, Display};
use std::io::BufRead;
use std::str::FromStr;

use serde::Serialize;

use tuya::TuyaFrame;
use zcl::{DecodedAttribute, RawCommandHeader};

use crate::error::{ApiError, ApiResult};

/// Kind of message delivered by the zigbee stack, which decides how the
/// payload is decoded
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Attribute value was set or reported: payload is attribute records
    SetAttrValue,

    /// Custom cluster command: payload is a tuya datapoint frame
    CustomCommand,

    /// Raw zcl command with its envelope
    Raw,
}

impl FromStr for MessageKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attr" | "set_attr_value" => Ok(Self::SetAttrValue),
            "dp" | "custom" | "custom_command" => Ok(Self::CustomCommand),
            "raw" => Ok(Self::Raw),
            _ => Err(ApiError::UnknownMessageKind(s.to_string())),
        }
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetAttrValue => write!(f, "attr"),
            Self::CustomCommand => write!(f, "dp"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decoded {
    Attributes {
        cluster_id: u16,
        attrs: Vec<DecodedAttribute>,
    },
    Tuya(TuyaFrame),
    Raw(RawCommandHeader),
}

/// Decode every attribute record in `data`.
///
/// The first record must decode. When `follow_trailing` is set, the records
/// after it are decoded until the data runs out; a broken record there only
/// ends the list.
pub fn decode_attributes(
    cluster_id: u16,
    data: &[u8],
    follow_trailing: bool,
) -> ApiResult<Vec<DecodedAttribute>> {
    let first = DecodedAttribute::parse(cluster_id, data)?;
    let mut next = follow_trailing.then(|| first.trailing.clone());
    let mut attrs = vec![first];

    while let Some(data) = next.take().filter(|data| !data.is_empty()) {
        match DecodedAttribute::parse(cluster_id, &data) {
            Ok(attr) => {
                next = Some(attr.trailing.clone());
                attrs.push(attr);
            }
            Err(err) => {
                log::warn!(
                    "Cluster {cluster_id:04x}: ignoring {} trailing bytes: {err}",
                    data.len()
                );
            }
        }
    }

    Ok(attrs)
}

/// Pick the decoder for `kind`, and run it on `data`
pub fn decode_message(
    kind: MessageKind,
    cluster_id: u16,
    data: &[u8],
    follow_trailing: bool,
) -> ApiResult<Decoded> {
    let res = match kind {
        MessageKind::SetAttrValue => Decoded::Attributes {
            cluster_id,
            attrs: decode_attributes(cluster_id, data, follow_trailing)?,
        },
        MessageKind::CustomCommand => Decoded::Tuya(TuyaFrame::parse(data)?),
        MessageKind::Raw => Decoded::Raw(RawCommandHeader::parse(data)?),
    };

    Ok(res)
}

/// Parse hex input, ignoring a `0x` prefix and any whitespace or `:`
/// separators
pub fn parse_hex(input: &str) -> ApiResult<Vec<u8>> {
    let input = input.trim();
    let input = input.strip_prefix("0x").unwrap_or(input);
    let digits: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    Ok(hex::decode(digits)?)
}

/// Parse a cluster id, given in hex with optional `0x` prefix
pub fn parse_cluster(input: &str) -> ApiResult<u16> {
    let input = input.trim();
    let input = input.strip_prefix("0x").unwrap_or(input);
    Ok(u16::from_str_radix(input, 16)?)
}

/// A single line of a replay file: `<kind> <cluster> <hex data>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub cluster_id: u16,
    pub data: Vec<u8>,
}

impl FromStr for Message {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let kind = parts.next();
        let cluster = parts.next();
        let data: String = parts.collect();

        let (Some(kind), Some(cluster)) = (kind, cluster) else {
            return Err(ApiError::MalformedLine(line.to_string()));
        };

        if data.is_empty() {
            return Err(ApiError::MalformedLine(line.to_string()));
        }

        Ok(Self {
            kind: kind.parse()?,
            cluster_id: parse_cluster(cluster)?,
            data: parse_hex(&data)?,
        })
    }
}

/// Outcome of replaying a capture
#[derive(Debug, Default)]
pub struct Replay {
    pub decoded: Vec<Decoded>,
    pub errors: usize,
}

/// Decode every message line read from `reader`.
///
/// Empty lines and `#` comments are skipped. A line that fails to parse or
/// decode is logged and counted, and does not stop the replay. Only read
/// errors are returned.
pub fn replay(name: &str, reader: impl BufRead, follow_trailing: bool) -> ApiResult<Replay> {
    let mut res = Replay::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let decoded = line
            .parse::<Message>()
            .and_then(|msg| decode_message(msg.kind, msg.cluster_id, &msg.data, follow_trailing));

        match decoded {
            Ok(decoded) => res.decoded.push(decoded),
            Err(err) => {
                res.errors += 1;
                log::error!("{name}:{}: {err}", index + 1);
            }
        }
    }

    if res.errors > 0 {
        log::warn!("{name}: {} messages could not be decoded", res.errors);
    }

    Ok(res)
}
