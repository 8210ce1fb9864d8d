use crate::cluster::AttributeDescriptor;
use crate::convert::{Conversion, EnumTable};

const POWER_SOURCES: &EnumTable = &[
    (0x00, "unknown"),
    (0x01, "mains_single_phase"),
    (0x02, "mains_three_phase"),
    (0x03, "battery"),
    (0x04, "dc_source"),
    (0x05, "emergency_mains_constant"),
    (0x06, "emergency_mains_transfer_switch"),
];

static ZCL_VERSION: AttributeDescriptor = AttributeDescriptor::plain("ZCL Version");
static APPLICATION_VERSION: AttributeDescriptor = AttributeDescriptor::plain("Application Version");
static STACK_VERSION: AttributeDescriptor = AttributeDescriptor::plain("Stack Version");
static HW_VERSION: AttributeDescriptor = AttributeDescriptor::plain("Hardware Version");
static POWER_SOURCE: AttributeDescriptor =
    AttributeDescriptor::new("Power Source", Conversion::EnumLookup(POWER_SOURCES), "");

#[must_use]
pub fn describe(attr_id: u16) -> Option<&'static AttributeDescriptor> {
    match attr_id {
        0x0000 => Some(&ZCL_VERSION),
        0x0001 => Some(&APPLICATION_VERSION),
        0x0002 => Some(&STACK_VERSION),
        0x0003 => Some(&HW_VERSION),
        0x0007 => Some(&POWER_SOURCE),
        _ => None,
    }
}
