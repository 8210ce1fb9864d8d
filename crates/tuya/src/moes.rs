//! Datapoints of the Moes thermostatic radiator valve (and the many
//! rebranded devices sharing its firmware).

use zcl::convert::EnumTable;

use crate::datapoint::DpType;
use crate::descriptor::DpDescriptor;

pub const DP_SYSTEM_MODE: u8 = 0x01;
pub const DP_TARGET_TEMP: u8 = 0x02;
pub const DP_CURRENT_TEMP: u8 = 0x03;
pub const DP_RUNNING_STATE: u8 = 0x06;
pub const DP_WINDOW_STATE: u8 = 0x07;
pub const DP_WINDOW_DETECT: u8 = 0x08;
pub const DP_CHILD_LOCK: u8 = 0x0c;
pub const DP_BATTERY: u8 = 0x0d;
pub const DP_ALARM: u8 = 0x0e;
pub const DP_MIN_TEMP: u8 = 0x0f;
pub const DP_MAX_TEMP: u8 = 0x10;
pub const DP_SCHEDULE_MON: u8 = 0x11;
pub const DP_SCHEDULE_TUE: u8 = 0x12;
pub const DP_SCHEDULE_WED: u8 = 0x13;
pub const DP_SCHEDULE_THU: u8 = 0x14;
pub const DP_SCHEDULE_FRI: u8 = 0x15;
pub const DP_SCHEDULE_SAT: u8 = 0x16;
pub const DP_SCHEDULE_SUN: u8 = 0x17;
pub const DP_TEMP_CALIBRATION: u8 = 0x65;
pub const DP_VALVE_POSITION: u8 = 0x6c;
pub const DP_COMFORT_MODE: u8 = 0x72;

const SYSTEM_MODES: &EnumTable = &[(0, "off"), (1, "manual"), (2, "away"), (102, "auto")];
const RUNNING_STATES: &EnumTable = &[(0, "idle"), (1, "heat")];
const WINDOW_STATES: &EnumTable = &[(0, "closed"), (1, "open")];
const OFF_ON: &EnumTable = &[(0, "off"), (1, "on")];
const LOCK_STATES: &EnumTable = &[(0, "unlocked"), (1, "locked")];
const COMFORT_MODES: &EnumTable = &[(0, "comfort"), (1, "eco")];

const fn temperature(name: &'static str) -> DpDescriptor {
    DpDescriptor::new(name, DpType::Value)
        .with_unit("°C")
        .with_divider(10.0)
}

const fn schedule(name: &'static str) -> DpDescriptor {
    DpDescriptor::new(name, DpType::Raw)
}

const fn choice(name: &'static str, values: &'static EnumTable) -> DpDescriptor {
    DpDescriptor::new(name, DpType::Enum).with_values(values)
}

static SYSTEM_MODE: DpDescriptor = choice("system_mode", SYSTEM_MODES);
static TARGET_TEMP: DpDescriptor = temperature("target_temperature").with_range(5.0, 35.0);
static CURRENT_TEMP: DpDescriptor = temperature("current_temperature").with_range(5.0, 35.0);
static RUNNING_STATE: DpDescriptor = choice("running_state", RUNNING_STATES);
static WINDOW_STATE: DpDescriptor = choice("window_state", WINDOW_STATES);
static WINDOW_DETECT: DpDescriptor = choice("window_detection", OFF_ON);
static CHILD_LOCK: DpDescriptor = choice("child_lock", LOCK_STATES);
static BATTERY: DpDescriptor = DpDescriptor::new("battery", DpType::Value)
    .with_unit("%")
    .with_range(0.0, 100.0);
static ALARM: DpDescriptor = choice("alarm_switch", OFF_ON);
static MIN_TEMP: DpDescriptor = temperature("min_temperature");
static MAX_TEMP: DpDescriptor = temperature("max_temperature");
static SCHEDULE_MON: DpDescriptor = schedule("schedule_monday");
static SCHEDULE_TUE: DpDescriptor = schedule("schedule_tuesday");
static SCHEDULE_WED: DpDescriptor = schedule("schedule_wednesday");
static SCHEDULE_THU: DpDescriptor = schedule("schedule_thursday");
static SCHEDULE_FRI: DpDescriptor = schedule("schedule_friday");
static SCHEDULE_SAT: DpDescriptor = schedule("schedule_saturday");
static SCHEDULE_SUN: DpDescriptor = schedule("schedule_sunday");
static TEMP_CALIBRATION: DpDescriptor =
    temperature("local_temperature_calibration").with_range(-30.0, 30.0);
static VALVE_POSITION: DpDescriptor = DpDescriptor::new("position", DpType::Value)
    .with_unit("%")
    .with_divider(10.0)
    .with_range(0.0, 100.0);
static COMFORT_MODE: DpDescriptor = choice("mode", COMFORT_MODES);

#[must_use]
pub fn describe(dp_id: u8) -> Option<&'static DpDescriptor> {
    let desc = match dp_id {
        DP_SYSTEM_MODE => &SYSTEM_MODE,
        DP_TARGET_TEMP => &TARGET_TEMP,
        DP_CURRENT_TEMP => &CURRENT_TEMP,
        DP_RUNNING_STATE => &RUNNING_STATE,
        DP_WINDOW_STATE => &WINDOW_STATE,
        DP_WINDOW_DETECT => &WINDOW_DETECT,
        DP_CHILD_LOCK => &CHILD_LOCK,
        DP_BATTERY => &BATTERY,
        DP_ALARM => &ALARM,
        DP_MIN_TEMP => &MIN_TEMP,
        DP_MAX_TEMP => &MAX_TEMP,
        DP_SCHEDULE_MON => &SCHEDULE_MON,
        DP_SCHEDULE_TUE => &SCHEDULE_TUE,
        DP_SCHEDULE_WED => &SCHEDULE_WED,
        DP_SCHEDULE_THU => &SCHEDULE_THU,
        DP_SCHEDULE_FRI => &SCHEDULE_FRI,
        DP_SCHEDULE_SAT => &SCHEDULE_SAT,
        DP_SCHEDULE_SUN => &SCHEDULE_SUN,
        DP_TEMP_CALIBRATION => &TEMP_CALIBRATION,
        DP_VALVE_POSITION => &VALVE_POSITION,
        DP_COMFORT_MODE => &COMFORT_MODE,
        _ => return None,
    };

    Some(desc)
}
