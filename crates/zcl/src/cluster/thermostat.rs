use crate::cluster::AttributeDescriptor;
use crate::convert::{Conversion, EnumTable};
use crate::labels::FlagTable;

const SYSTEM_MODES: &EnumTable = &[
    (0x00, "off"),
    (0x01, "auto"),
    (0x03, "cool"),
    (0x04, "heat"),
    (0x05, "emergency_heating"),
    (0x06, "precooling"),
    (0x07, "fan_only"),
    (0x08, "dry"),
    (0x09, "sleep"),
];

const RUNNING_STATE: &FlagTable = &[
    (0x0001, "Heat"),
    (0x0002, "Cool"),
    (0x0004, "Fan"),
    (0x0008, "Heat2"),
    (0x0010, "Cool2"),
    (0x0020, "Fan2"),
    (0x0040, "Fan3"),
];

static LOCAL_TEMPERATURE: AttributeDescriptor =
    AttributeDescriptor::new("Local Temperature", Conversion::Scale(100.0), "°C");
static CALIBRATION: AttributeDescriptor =
    AttributeDescriptor::new("Local Temperature Calibration", Conversion::Scale(10.0), "°C");
static HEATING_SETPOINT: AttributeDescriptor =
    AttributeDescriptor::new("Occupied Heating Setpoint", Conversion::Scale(100.0), "°C");
static SYSTEM_MODE: AttributeDescriptor =
    AttributeDescriptor::new("System Mode", Conversion::EnumLookup(SYSTEM_MODES), "");
static THERMOSTAT_RUNNING_STATE: AttributeDescriptor = AttributeDescriptor::new(
    "Running State",
    Conversion::BitmaskLabels(RUNNING_STATE),
    "",
);

#[must_use]
pub fn describe(attr_id: u16) -> Option<&'static AttributeDescriptor> {
    match attr_id {
        0x0000 => Some(&LOCAL_TEMPERATURE),
        0x0010 => Some(&CALIBRATION),
        0x0012 => Some(&HEATING_SETPOINT),
        0x001c => Some(&SYSTEM_MODE),
        0x0029 => Some(&THERMOSTAT_RUNNING_STATE),
        _ => None,
    }
}
