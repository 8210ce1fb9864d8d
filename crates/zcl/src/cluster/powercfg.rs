use crate::cluster::AttributeDescriptor;
use crate::convert::Conversion;

static BATTERY_VOLTAGE: AttributeDescriptor =
    AttributeDescriptor::new("Battery Voltage", Conversion::Scale(10.0), "V");

/* reported in half-percent steps */
static BATTERY_PERCENTAGE: AttributeDescriptor =
    AttributeDescriptor::new("Battery Percentage Remaining", Conversion::Scale(2.0), "%");

#[must_use]
pub fn describe(attr_id: u16) -> Option<&'static AttributeDescriptor> {
    match attr_id {
        0x0020 => Some(&BATTERY_VOLTAGE),
        0x0021 => Some(&BATTERY_PERCENTAGE),
        _ => None,
    }
}
