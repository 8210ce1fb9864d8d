use crate::cluster::AttributeDescriptor;
use crate::convert::Conversion;

static MEASURED: AttributeDescriptor =
    AttributeDescriptor::new("Measured Value", Conversion::Scale(100.0), "°C");
static MIN_MEASURED: AttributeDescriptor =
    AttributeDescriptor::new("Min Measured Value", Conversion::Scale(100.0), "°C");
static MAX_MEASURED: AttributeDescriptor =
    AttributeDescriptor::new("Max Measured Value", Conversion::Scale(100.0), "°C");

#[must_use]
pub fn describe(attr_id: u16) -> Option<&'static AttributeDescriptor> {
    match attr_id {
        0x0000 => Some(&MEASURED),
        0x0001 => Some(&MIN_MEASURED),
        0x0002 => Some(&MAX_MEASURED),
        _ => None,
    }
}
