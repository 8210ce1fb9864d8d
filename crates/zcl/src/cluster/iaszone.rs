use crate::cluster::AttributeDescriptor;
use crate::convert::{Conversion, EnumTable};
use crate::labels::FlagTable;

pub const ZONE_STATUS_FLAGS: &FlagTable = &[
    (0x0001, "Alarm1"),
    (0x0002, "Alarm2"),
    (0x0004, "Tamper"),
    (0x0008, "Battery"),
    (0x0010, "SupervisionReports"),
    (0x0020, "RestoreReports"),
    (0x0040, "Trouble"),
    (0x0080, "ACMains"),
    (0x0100, "Test"),
];

const ZONE_STATES: &EnumTable = &[(0x00, "not_enrolled"), (0x01, "enrolled")];

static ZONE_STATE: AttributeDescriptor =
    AttributeDescriptor::new("Zone State", Conversion::EnumLookup(ZONE_STATES), "");
static ZONE_TYPE: AttributeDescriptor = AttributeDescriptor::plain("Zone Type");
static ZONE_STATUS: AttributeDescriptor = AttributeDescriptor::new(
    "Zone Status",
    Conversion::BitmaskLabels(ZONE_STATUS_FLAGS),
    "",
);

#[must_use]
pub fn describe(attr_id: u16) -> Option<&'static AttributeDescriptor> {
    match attr_id {
        0x0000 => Some(&ZONE_STATE),
        0x0001 => Some(&ZONE_TYPE),
        0x0002 => Some(&ZONE_STATUS),
        _ => None,
    }
}
