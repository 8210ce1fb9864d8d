use crate::cluster::AttributeDescriptor;
use crate::convert::{Conversion, EnumTable};

const STARTUP_ONOFF: &EnumTable = &[(0x00, "off"), (0x01, "on"), (0x02, "toggle"), (0xff, "previous")];

static ON_OFF: AttributeDescriptor = AttributeDescriptor::plain("On Off");
static STARTUP: AttributeDescriptor =
    AttributeDescriptor::new("Start Up On Off", Conversion::EnumLookup(STARTUP_ONOFF), "");

#[must_use]
pub fn describe(attr_id: u16) -> Option<&'static AttributeDescriptor> {
    match attr_id {
        0x0000 => Some(&ON_OFF),
        0x4003 => Some(&STARTUP),
        _ => None,
    }
}
