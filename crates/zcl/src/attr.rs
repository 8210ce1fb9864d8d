use serde::Serialize;

use crate::cluster;
use crate::datatype;
use crate::error::{ConvertError, ZclError, ZclResult};
use crate::value::{Value, serialize_hex};

/// attribute id (2 bytes) + data type (1 byte)
pub const ATTR_HEADER_SIZE: usize = 3;

/// A single attribute record, named and converted according to the
/// attribute registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedAttribute {
    pub cluster_id: u16,
    pub attribute_id: u16,
    pub name: String,
    pub type_name: String,
    pub raw_value: Value,
    pub value: Value,
    pub unit: &'static str,

    /// Bytes following this record, which may hold further records
    #[serde(serialize_with = "serialize_hex")]
    pub trailing: Vec<u8>,

    /// Set when the descriptor conversion failed, and `value` fell back to
    /// `raw_value`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_error: Option<ConvertError>,
}

impl DecodedAttribute {
    /// Parse one attribute record: `[attr id:u16 LE][type:u8][value][trailing..]`
    ///
    /// Unknown type tags are read as a single raw byte, so the rest of the
    /// message can still be reported. Only truncation is an error.
    pub fn parse(cluster_id: u16, data: &[u8]) -> ZclResult<Self> {
        if data.len() < ATTR_HEADER_SIZE {
            return Err(ZclError::Truncated {
                stage: "header",
                needed: ATTR_HEADER_SIZE,
                actual: data.len(),
            });
        }

        let (hdr, data) = data.split_at(ATTR_HEADER_SIZE);

        let attribute_id = u16::from_le_bytes([hdr[0], hdr[1]]);
        let tag = hdr[2];

        let entry = datatype::resolve(tag)
            .inspect_err(|err| log::debug!("Attribute {attribute_id:04x}: {err}, reading 1 raw byte"))
            .ok();

        let (type_name, width) = entry.map_or_else(
            || (format!("UNKNOWN_TYPE_{tag}"), 1),
            |entry| (entry.name.to_string(), entry.width),
        );

        if data.len() < width {
            return Err(ZclError::TruncatedValue {
                attr_id: attribute_id,
                type_name,
                needed: ATTR_HEADER_SIZE + width,
                actual: ATTR_HEADER_SIZE + data.len(),
            });
        }

        let (value_data, trailing) = data.split_at(width);

        let raw_value = match entry {
            Some(entry) => entry.decode(value_data).unwrap_or_else(|err| {
                log::debug!("Attribute {attribute_id:04x}: {err}, using raw bytes");
                Value::Bytes(value_data.to_vec())
            }),
            None => Value::Bytes(value_data.to_vec()),
        };

        let mut res = Self {
            cluster_id,
            attribute_id,
            name: format!("Unknown Attribute 0x{attribute_id:04X}"),
            type_name,
            value: raw_value.clone(),
            raw_value,
            unit: "",
            trailing: trailing.to_vec(),
            conversion_error: None,
        };

        if let Some(desc) = cluster::lookup(cluster_id, attribute_id) {
            res.name = desc.name.to_string();
            res.unit = desc.unit;
            match desc.convert.apply(&res.raw_value) {
                Ok(value) => res.value = value,
                Err(err) => {
                    log::debug!("Attribute {attribute_id:04x} ({}): {err}", desc.name);
                    res.conversion_error = Some(err);
                }
            }
        }

        Ok(res)
    }

    #[must_use]
    pub fn has_trailing(&self) -> bool {
        !self.trailing.is_empty()
    }
}
