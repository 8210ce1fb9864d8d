use zcl::convert::{EnumTable, enum_label};
use zcl::error::ConvertError;
use zcl::value::Value;

use crate::datapoint::{DpType, DpValue};

/// Static description of how to name and format one datapoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpDescriptor {
    pub name: &'static str,
    pub kind: DpType,
    pub unit: Option<&'static str>,
    pub divider: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub values: Option<&'static EnumTable>,
}

impl DpDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, kind: DpType) -> Self {
        Self {
            name,
            kind,
            unit: None,
            divider: None,
            min: None,
            max: None,
            values: None,
        }
    }

    #[must_use]
    pub const fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub const fn with_divider(mut self, divider: f64) -> Self {
        self.divider = Some(divider);
        self
    }

    #[must_use]
    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub const fn with_values(mut self, values: &'static EnumTable) -> Self {
        self.values = Some(values);
        self
    }

    /// Scale and clamp a numeric reading. Out-of-range values are clamped,
    /// not rejected, since devices report them during startup.
    #[must_use]
    pub fn scale(&self, raw: f64) -> f64 {
        let mut value = raw;
        if let Some(divider) = self.divider {
            value /= divider;
        }
        if let Some(min) = self.min {
            value = value.max(min);
        }
        if let Some(max) = self.max {
            value = value.min(max);
        }
        value
    }

    /// Format a decoded value according to the kind of this datapoint
    pub fn format(&self, raw: &DpValue) -> Result<Value, ConvertError> {
        let value = Value::from(raw);

        match self.kind {
            DpType::Bool => Ok(Value::Bool(value.truthy())),
            DpType::Enum => {
                let Some(values) = self.values else {
                    return Ok(value);
                };
                let code = value
                    .as_i64()
                    .ok_or_else(|| ConvertError::NotEnumCode(value.to_string()))?;
                Ok(Value::Text(enum_label(values, code)))
            }
            DpType::Value => {
                let num = value
                    .as_f64()
                    .ok_or_else(|| ConvertError::NotNumeric(value.to_string()))?;
                let num = self.scale(num);
                match self.unit {
                    Some(unit) => Ok(Value::Text(format!("{num:.1}{unit}"))),
                    None => Ok(Value::Float(num)),
                }
            }
            DpType::Raw | DpType::String | DpType::Bitmap => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use zcl::error::ConvertError;
    use zcl::value::Value;

    use crate::datapoint::{DpType, DpValue};
    use crate::descriptor::DpDescriptor;
    use crate::{compare, compare_float};

    const TEMP: DpDescriptor = DpDescriptor::new("target_temperature", DpType::Value)
        .with_unit("°C")
        .with_divider(10.0)
        .with_range(5.0, 35.0);

    #[test]
    fn value_with_unit() {
        assert_eq!(
            TEMP.format(&DpValue::Value(225)).unwrap(),
            Value::Text("22.5°C".into())
        );
    }

    #[test]
    fn value_clamped() {
        assert_eq!(
            TEMP.format(&DpValue::Value(400)).unwrap(),
            Value::Text("35.0°C".into())
        );
        assert_eq!(
            TEMP.format(&DpValue::Value(-10)).unwrap(),
            Value::Text("5.0°C".into())
        );
    }

    #[test]
    fn value_without_unit_is_clamped() {
        let desc = DpDescriptor::new("level", DpType::Value)
            .with_divider(10.0)
            .with_range(0.0, 100.0);
        compare!(desc.scale(1234.0), 100.0);
        compare!(desc.scale(-5.0), 0.0);
        compare!(desc.scale(455.0), 45.5);
        assert_eq!(desc.format(&DpValue::Value(2000)).unwrap(), Value::Float(100.0));
    }

    #[test]
    fn value_unbounded() {
        let desc = DpDescriptor::new("offset", DpType::Value);
        compare!(desc.scale(-1234.0), -1234.0);
    }

    #[test]
    fn value_from_string_fails() {
        let err = TEMP.format(&DpValue::String("hot".into())).unwrap_err();
        assert_eq!(err, ConvertError::NotNumeric("hot".into()));
    }

    #[test]
    fn enum_labels() {
        let desc = DpDescriptor::new("mode", DpType::Enum).with_values(&[(0, "comfort"), (1, "eco")]);
        assert_eq!(
            desc.format(&DpValue::Enum(1)).unwrap(),
            Value::Text("eco".into())
        );
        assert_eq!(
            desc.format(&DpValue::Enum(7)).unwrap(),
            Value::Text("unknown_7".into())
        );
    }

    #[test]
    fn enum_without_table() {
        let desc = DpDescriptor::new("mode", DpType::Enum);
        assert_eq!(desc.format(&DpValue::Enum(3)).unwrap(), Value::Int(3));
    }

    #[test]
    fn bool_truthiness() {
        let desc = DpDescriptor::new("lock", DpType::Bool);
        assert_eq!(desc.format(&DpValue::Enum(1)).unwrap(), Value::Bool(true));
        assert_eq!(desc.format(&DpValue::Value(0)).unwrap(), Value::Bool(false));
        assert_eq!(desc.format(&DpValue::Raw(vec![0])).unwrap(), Value::Bool(true));
        assert_eq!(desc.format(&DpValue::Raw(vec![])).unwrap(), Value::Bool(false));
    }

    #[test]
    fn passthrough() {
        let desc = DpDescriptor::new("schedule", DpType::Raw);
        assert_eq!(
            desc.format(&DpValue::Raw(vec![1, 2])).unwrap(),
            Value::Bytes(vec![1, 2])
        );
    }
}
