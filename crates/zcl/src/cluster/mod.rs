//! Attribute descriptors, grouped by cluster.
//!
//! Each cluster module exposes a `describe` function mapping an attribute id
//! to its static descriptor. [`lookup`] dispatches on the cluster id.

pub mod basic;
pub mod iaszone;
pub mod levelctrl;
pub mod onoff;
pub mod powercfg;
pub mod temperature;
pub mod thermostat;

use crate::convert::Conversion;

pub const CLUSTER_BASIC: u16 = 0x0000;
pub const CLUSTER_POWER_CONFIG: u16 = 0x0001;
pub const CLUSTER_IDENTIFY: u16 = 0x0003;
pub const CLUSTER_GROUPS: u16 = 0x0004;
pub const CLUSTER_SCENES: u16 = 0x0005;
pub const CLUSTER_ON_OFF: u16 = 0x0006;
pub const CLUSTER_LEVEL_CONTROL: u16 = 0x0008;
pub const CLUSTER_OTA_UPGRADE: u16 = 0x0019;
pub const CLUSTER_THERMOSTAT: u16 = 0x0201;
pub const CLUSTER_COLOR_CONTROL: u16 = 0x0300;
pub const CLUSTER_TEMPERATURE: u16 = 0x0402;
pub const CLUSTER_HUMIDITY: u16 = 0x0405;
pub const CLUSTER_IAS_ZONE: u16 = 0x0500;
pub const CLUSTER_TUYA: u16 = 0xef00;

/// Static description of how to name and convert one attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeDescriptor {
    pub name: &'static str,
    pub convert: Conversion,
    pub unit: &'static str,
}

impl AttributeDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, convert: Conversion, unit: &'static str) -> Self {
        Self {
            name,
            convert,
            unit,
        }
    }

    #[must_use]
    pub const fn plain(name: &'static str) -> Self {
        Self::new(name, Conversion::Identity, "")
    }
}

#[must_use]
pub fn lookup(cluster_id: u16, attr_id: u16) -> Option<&'static AttributeDescriptor> {
    match cluster_id {
        CLUSTER_BASIC => basic::describe(attr_id),
        CLUSTER_POWER_CONFIG => powercfg::describe(attr_id),
        CLUSTER_ON_OFF => onoff::describe(attr_id),
        CLUSTER_LEVEL_CONTROL => levelctrl::describe(attr_id),
        CLUSTER_THERMOSTAT => thermostat::describe(attr_id),
        CLUSTER_TEMPERATURE => temperature::describe(attr_id),
        CLUSTER_IAS_ZONE => iaszone::describe(attr_id),
        _ => None,
    }
}

#[must_use]
pub const fn cluster_name(cluster_id: u16) -> Option<&'static str> {
    match cluster_id {
        CLUSTER_BASIC => Some("Basic"),
        CLUSTER_POWER_CONFIG => Some("PowerConfiguration"),
        CLUSTER_IDENTIFY => Some("Identify"),
        CLUSTER_GROUPS => Some("Groups"),
        CLUSTER_SCENES => Some("Scenes"),
        CLUSTER_ON_OFF => Some("OnOff"),
        CLUSTER_LEVEL_CONTROL => Some("LevelControl"),
        CLUSTER_OTA_UPGRADE => Some("OtaUpgrade"),
        CLUSTER_THERMOSTAT => Some("Thermostat"),
        CLUSTER_COLOR_CONTROL => Some("ColorControl"),
        CLUSTER_TEMPERATURE => Some("TemperatureMeasurement"),
        CLUSTER_HUMIDITY => Some("RelativeHumidity"),
        CLUSTER_IAS_ZONE => Some("IasZone"),
        CLUSTER_TUYA => Some("TuyaPrivate"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::cluster::{
        CLUSTER_IAS_ZONE, CLUSTER_POWER_CONFIG, CLUSTER_TUYA, cluster_name, lookup,
    };
    use crate::convert::Conversion;

    #[test]
    fn lookup_known() {
        let desc = lookup(CLUSTER_POWER_CONFIG, 0x0021).unwrap();
        assert_eq!(desc.name, "Battery Percentage Remaining");
        assert_eq!(desc.convert, Conversion::Scale(2.0));
        assert_eq!(desc.unit, "%");

        let desc = lookup(CLUSTER_IAS_ZONE, 0x0002).unwrap();
        assert_eq!(desc.name, "Zone Status");
    }

    #[test]
    fn lookup_unknown() {
        assert!(lookup(CLUSTER_POWER_CONFIG, 0x1234).is_none());
        assert!(lookup(0x7777, 0x0000).is_none());
        assert!(lookup(CLUSTER_TUYA, 0x0000).is_none());
    }

    #[test]
    fn names() {
        assert_eq!(cluster_name(0x0500), Some("IasZone"));
        assert_eq!(cluster_name(0xef00), Some("TuyaPrivate"));
        assert_eq!(cluster_name(0x7777), None);
    }
}
