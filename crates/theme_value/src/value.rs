use std::fmt;

use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Number;

/// A raw token value, as authored in a token table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ThemeValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Opaque leaf. Elements are never normalized.
    Sequence(Vec<ThemeValue>),
    Map(IndexMap<String, ThemeValue>),
}

impl ThemeValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Map(_) => ValueKind::Map,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ThemeValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, ThemeValue>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a map.
    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.as_map().and_then(|entries| entries.get(key))
    }
}

/// The shape of a [`ThemeValue`], used in diagnostics.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn name(&self) -> &'static str)]
pub enum ValueKind {
    #[assoc(name = "null")]
    Null,
    #[assoc(name = "boolean")]
    Bool,
    #[assoc(name = "number")]
    Number,
    #[assoc(name = "string")]
    String,
    #[assoc(name = "sequence")]
    Sequence,
    #[assoc(name = "map")]
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token value after normalization.
///
/// Leaves are always strings or sequences. Sequences are carried over from the
/// raw value verbatim, so their elements keep their original types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedValue {
    String(String),
    Sequence(Vec<ThemeValue>),
    Map(IndexMap<String, NormalizedValue>),
}

impl NormalizedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ThemeValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, NormalizedValue>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&NormalizedValue> {
        self.as_map().and_then(|entries| entries.get(key))
    }
}

impl From<NormalizedValue> for ThemeValue {
    fn from(value: NormalizedValue) -> Self {
        match value {
            NormalizedValue::String(string) => Self::String(string),
            NormalizedValue::Sequence(items) => Self::Sequence(items),
            NormalizedValue::Map(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ThemeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ( $( $ty:ty ),+ ) => {
        $(
            impl From<$ty> for ThemeValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value.into())
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Non-finite floats have no JSON number form and become [`ThemeValue::Null`].
impl From<f64> for ThemeValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

/// Goes through the shortest `f32` decimal so `0.1f32` stays `0.1`.
impl From<f32> for ThemeValue {
    fn from(value: f32) -> Self {
        value.to_string().parse::<f64>().map_or(Self::Null, Self::from)
    }
}

impl<T: Into<ThemeValue>> From<Option<T>> for ThemeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<ThemeValue>> From<Vec<T>> for ThemeValue {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ThemeValue>> From<IndexMap<String, T>> for ThemeValue {
    fn from(entries: IndexMap<String, T>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<ThemeValue>> FromIterator<(K, V)> for ThemeValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for ThemeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(boolean) => Self::Bool(boolean),
            Value::Number(number) => Self::Number(number),
            Value::String(string) => Self::String(string),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}
