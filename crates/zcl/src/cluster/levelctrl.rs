use crate::cluster::AttributeDescriptor;
use crate::convert::Conversion;

static CURRENT_LEVEL: AttributeDescriptor = AttributeDescriptor::plain("Current Level");

/* tenths of a second */
static ON_OFF_TRANSITION: AttributeDescriptor =
    AttributeDescriptor::new("On Off Transition Time", Conversion::Scale(10.0), "s");

#[must_use]
pub fn describe(attr_id: u16) -> Option<&'static AttributeDescriptor> {
    match attr_id {
        0x0000 => Some(&CURRENT_LEVEL),
        0x0010 => Some(&ON_OFF_TRANSITION),
        _ => None,
    }
}
