use crate::error::ConvertError;
use crate::labels::{FlagTable, labels};
use crate::value::Value;

/// Table of enum codes and their names
pub type EnumTable = [(i64, &'static str)];

/// Conversion rule attached to a descriptor, turning a raw decoded value into
/// its display form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    Identity,
    Scale(f64),
    EnumLookup(&'static EnumTable),
    BitmaskLabels(&'static FlagTable),
}

impl Conversion {
    pub fn apply(&self, raw: &Value) -> Result<Value, ConvertError> {
        match self {
            Self::Identity => Ok(raw.clone()),
            Self::Scale(divider) => raw
                .as_f64()
                .map(|val| Value::Float(val / divider))
                .ok_or_else(|| ConvertError::NotNumeric(raw.to_string())),
            Self::EnumLookup(table) => {
                let code = raw
                    .as_i64()
                    .ok_or_else(|| ConvertError::NotEnumCode(raw.to_string()))?;
                Ok(Value::Text(enum_label(table, code)))
            }
            Self::BitmaskLabels(table) => {
                let mask = raw
                    .as_i64()
                    .and_then(|val| u32::try_from(val).ok())
                    .ok_or_else(|| ConvertError::NotBitmask(raw.to_string()))?;
                Ok(Value::Labels(labels(mask, table)))
            }
        }
    }
}

/// Name of `code` in `table`, or `unknown_<code>`
#[must_use]
pub fn enum_label(table: &EnumTable, code: i64) -> String {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map_or_else(|| format!("unknown_{code}"), |(_, name)| (*name).to_string())
}

#[cfg(test)]
mod tests {
    use crate::convert::{Conversion, EnumTable, enum_label};
    use crate::error::ConvertError;
    use crate::labels::FlagTable;
    use crate::value::Value;

    const MODES: &EnumTable = &[(0, "off"), (4, "heat")];
    const FLAGS: &FlagTable = &[(0x01, "Alarm1"), (0x04, "Tamper")];

    #[test]
    fn identity() {
        let raw = Value::Bytes(vec![1, 2]);
        assert_eq!(Conversion::Identity.apply(&raw), Ok(raw));
    }

    #[test]
    fn scale() {
        assert_eq!(
            Conversion::Scale(2.0).apply(&Value::Int(100)),
            Ok(Value::Float(50.0))
        );
        assert_eq!(
            Conversion::Scale(10.0).apply(&Value::Int(-25)),
            Ok(Value::Float(-2.5))
        );
    }

    #[test]
    fn scale_rejects_bytes() {
        let res = Conversion::Scale(10.0).apply(&Value::Bytes(vec![0xab]));
        assert_eq!(res, Err(ConvertError::NotNumeric("ab".to_string())));
    }

    #[test]
    fn enum_lookup() {
        let conv = Conversion::EnumLookup(MODES);
        assert_eq!(conv.apply(&Value::Int(4)), Ok(Value::Text("heat".into())));
        assert_eq!(
            conv.apply(&Value::Int(9)),
            Ok(Value::Text("unknown_9".into()))
        );
        assert!(conv.apply(&Value::Text("heat".into())).is_err());
    }

    #[test]
    fn bitmask_labels() {
        let conv = Conversion::BitmaskLabels(FLAGS);
        assert_eq!(
            conv.apply(&Value::Int(0x05)),
            Ok(Value::Labels(vec!["Alarm1", "Tamper"]))
        );
        assert_eq!(
            conv.apply(&Value::Int(-1)),
            Err(ConvertError::NotBitmask("-1".to_string()))
        );
    }

    #[test]
    fn enum_label_fallback() {
        assert_eq!(enum_label(MODES, 0), "off");
        assert_eq!(enum_label(MODES, 7), "unknown_7");
    }
}
