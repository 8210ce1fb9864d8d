use std::fmt::{self, Debug, Display};

use packed_struct::prelude::*;
use serde::Serialize;

use crate::cluster;
use crate::error::{ZclError, ZclResult};
use crate::value::serialize_hex;

/// Size of the fixed envelope in front of a raw command payload
pub const RAW_HEADER_SIZE: usize = 12;

#[derive(PrimitiveEnum_u8, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ZclCommand {
    ReadAttrib = 0x00,
    ReadAttribResp = 0x01,
    WriteAttrib = 0x02,
    WriteAttribUndiv = 0x03,
    WriteAttribResp = 0x04,
    WriteAttribNoResp = 0x05,
    ConfigReport = 0x06,
    ConfigReportResp = 0x07,
    ReadReportCfg = 0x08,
    ReadReportCfgResp = 0x09,
    ReportAttrib = 0x0a,
    DefaultResp = 0x0b,
    DiscAttrib = 0x0c,
    DiscAttribResp = 0x0d,
    ReadAttribStruct = 0x0e,
    WriteAttribStruct = 0x0f,
    WriteAttribStructResp = 0x10,
    DiscoverCommandsReceived = 0x11,
    DiscoverCommandsReceivedRes = 0x12,
    DiscoverCommandsGenerated = 0x13,
    DiscoverCommandsGeneratedRes = 0x14,
    DiscoverAttrExt = 0x15,
    DiscoverAttrExtRes = 0x16,
}

#[derive(PrimitiveEnum_u8, Serialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ZclFrameDirection {
    ClientToServer = 0x00,
    ServerToClient = 0x01,
}

impl Display for ZclFrameDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientToServer => write!(f, "client->server"),
            Self::ServerToClient => write!(f, "server->client"),
        }
    }
}

#[derive(PackedStruct, Debug, Clone, Copy)]
#[packed_struct(endian = "lsb", bit_numbering = "msb0")]
struct RawHeaderFields {
    #[packed_field(bytes = "0")]
    cmd: u8,

    #[packed_field(bytes = "1")]
    direction: u8,

    #[packed_field(bytes = "2")]
    seqnr: u8,

    #[packed_field(bytes = "3")]
    common_command: u8,

    #[packed_field(bytes = "4")]
    disable_default_response: u8,

    #[packed_field(bytes = "5")]
    manufacturer_specific: u8,

    #[packed_field(bytes = "6..=7")]
    mfcode: u16,

    #[packed_field(bytes = "8..=9")]
    profile_id: u16,

    #[packed_field(bytes = "10..=11")]
    cluster_id: u16,
}

/// Envelope of a raw zcl command, as delivered by the zigbee stack:
///
/// ```text
/// [cmd][dir][seq][common][ddr][manuf][mfcode:u16 LE][profile:u16 LE][cluster:u16 LE][payload..]
/// ```
///
/// The payload is not interpreted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RawCommandHeader {
    pub cmd: u8,
    pub direction: ZclFrameDirection,
    pub seqnr: u8,
    pub common_command: bool,
    pub disable_default_response: bool,
    pub manufacturer_specific: bool,
    pub mfcode: Option<u16>,
    pub profile_id: u16,
    pub cluster_id: u16,
    #[serde(serialize_with = "serialize_hex")]
    pub payload: Vec<u8>,
}

impl RawCommandHeader {
    pub fn parse(data: &[u8]) -> ZclResult<Self> {
        if data.len() < RAW_HEADER_SIZE {
            return Err(ZclError::Truncated {
                stage: "raw-header",
                needed: RAW_HEADER_SIZE,
                actual: data.len(),
            });
        }

        let (hdr, payload) = data.split_at(RAW_HEADER_SIZE);
        let hdr = RawHeaderFields::unpack_from_slice(hdr)?;

        let direction = if hdr.direction == 0 {
            ZclFrameDirection::ClientToServer
        } else {
            ZclFrameDirection::ServerToClient
        };

        let manufacturer_specific = hdr.manufacturer_specific != 0;

        Ok(Self {
            cmd: hdr.cmd,
            direction,
            seqnr: hdr.seqnr,
            common_command: hdr.common_command != 0,
            disable_default_response: hdr.disable_default_response != 0,
            manufacturer_specific,
            mfcode: manufacturer_specific.then_some(hdr.mfcode),
            profile_id: hdr.profile_id,
            cluster_id: hdr.cluster_id,
            payload: payload.to_vec(),
        })
    }

    #[must_use]
    pub const fn c2s(&self) -> bool {
        matches!(self.direction, ZclFrameDirection::ClientToServer)
    }

    /// Name of the profile-wide command, if this is one
    #[must_use]
    pub fn command(&self) -> Option<ZclCommand> {
        if self.common_command {
            ZclCommand::from_primitive(self.cmd)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn cluster_name(&self) -> Option<&'static str> {
        cluster::cluster_name(self.cluster_id)
    }
}

impl Debug for RawCommandHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        write!(f, "cmd:{:02x}, ", self.cmd)?;
        write!(f, "dir:{}, ", if self.c2s() { "C2S" } else { "S2C" })?;
        write!(f, "seq:{}, ", self.seqnr)?;
        write!(f, "cc:{}, ", u8::from(self.common_command))?;
        write!(f, "ddr:{}, ", u8::from(self.disable_default_response))?;
        if let Some(mfcode) = self.mfcode {
            write!(f, "mf:{mfcode:04x}, ")?;
        }
        write!(f, "profile:{:04x}, ", self.profile_id)?;
        write!(f, "cluster:{:04x}", self.cluster_id)?;
        write!(f, " ] {}", hex::encode(&self.payload))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::frame::{RAW_HEADER_SIZE, RawCommandHeader, ZclCommand, ZclFrameDirection};

    #[test]
    fn parse_raw_header() {
        let data = hex::decode("0a01070100010210040100efdeadbeef").unwrap();
        let hdr = RawCommandHeader::parse(&data).unwrap();

        assert_eq!(hdr.cmd, 0x0a);
        assert_eq!(hdr.direction, ZclFrameDirection::ServerToClient);
        assert_eq!(hdr.seqnr, 7);
        assert!(hdr.common_command);
        assert!(!hdr.disable_default_response);
        assert!(hdr.manufacturer_specific);
        assert_eq!(hdr.mfcode, Some(0x1002));
        assert_eq!(hdr.profile_id, 0x0104);
        assert_eq!(hdr.cluster_id, 0xef00);
        assert_eq!(hdr.payload, [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hdr.command(), Some(ZclCommand::ReportAttrib));
        assert_eq!(hdr.cluster_name(), Some("TuyaPrivate"));
    }

    #[test]
    fn manufacturer_code_needs_flag() {
        let data = hex::decode("010000000100341204010600").unwrap();
        let hdr = RawCommandHeader::parse(&data).unwrap();

        assert!(hdr.c2s());
        assert!(!hdr.manufacturer_specific);
        assert_eq!(hdr.mfcode, None);
        assert_eq!(hdr.cluster_id, 0x0006);
        assert!(hdr.payload.is_empty());
        assert_eq!(hdr.command(), None);
    }

    #[test]
    fn truncated() {
        let data = [0u8; RAW_HEADER_SIZE - 1];
        let err = RawCommandHeader::parse(&data).unwrap_err();
        assert_eq!(err.stage(), Some("raw-header"));
    }

    #[test]
    fn debug_format() {
        let data = hex::decode("0201050000000000040106000102").unwrap();
        let hdr = RawCommandHeader::parse(&data).unwrap();
        assert_eq!(
            format!("{hdr:?}"),
            "[ cmd:02, dir:S2C, seq:5, cc:0, ddr:0, profile:0104, cluster:0006 ] 0102"
        );
    }
}
