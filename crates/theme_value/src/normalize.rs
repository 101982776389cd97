use serde_json::Number;

use crate::{NormalizedValue, ThemeValue};

/// Normalizes a token value for consumption by a styling system.
///
/// Strings and sequences are returned as they are; sequence elements are not
/// visited. Maps are rebuilt with the same keys in the same order, each value
/// normalized recursively. Every other scalar is converted to a string:
///
/// | value            | string                                   |
/// |------------------|------------------------------------------|
/// | `null`           | `"null"`                                 |
/// | `true` / `false` | `"true"` / `"false"`                     |
/// | integer          | decimal digits, `2` -> `"2"`             |
/// | float            | shortest decimal, `1.0` -> `"1"`, `-0.0` -> `"0"` |
///
/// This never fails.
pub fn process_value(value: &ThemeValue) -> NormalizedValue {
    match value {
        ThemeValue::String(string) => NormalizedValue::String(string.clone()),
        ThemeValue::Sequence(items) => NormalizedValue::Sequence(items.clone()),
        ThemeValue::Map(entries) => NormalizedValue::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), process_value(value)))
                .collect(),
        ),
        ThemeValue::Null => coerced(value, "null".to_owned()),
        ThemeValue::Bool(boolean) => coerced(value, boolean.to_string()),
        ThemeValue::Number(number) => coerced(value, number_to_string(number)),
    }
}

fn coerced(value: &ThemeValue, string: String) -> NormalizedValue {
    log::trace!("coerced {} leaf to {string:?}", value.kind());
    NormalizedValue::String(string)
}

fn number_to_string(number: &Number) -> String {
    if let Some(integer) = number.as_i64() {
        return integer.to_string();
    }

    if let Some(integer) = number.as_u64() {
        return integer.to_string();
    }

    match number.as_f64() {
        // `Display` for floats never uses an exponent and drops `.0`.
        Some(float) if float == 0.0 => "0".to_owned(),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}
