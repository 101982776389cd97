use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, SeqAccess, Visitor},
};
use serde_json::Number;

use crate::ThemeValue;

impl<'de> Deserialize<'de> for ThemeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ThemeValueVisitor)
    }
}

struct ThemeValueVisitor;

impl<'de> Visitor<'de> for ThemeValueVisitor {
    type Value = ThemeValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a token value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<ThemeValue, E> {
        Ok(ThemeValue::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<ThemeValue, E> {
        Ok(ThemeValue::Number(value.into()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<ThemeValue, E> {
        Ok(ThemeValue::Number(value.into()))
    }

    fn visit_f64<E>(self, value: f64) -> Result<ThemeValue, E> {
        Ok(Number::from_f64(value).map_or(ThemeValue::Null, ThemeValue::Number))
    }

    fn visit_str<E>(self, value: &str) -> Result<ThemeValue, E> {
        Ok(ThemeValue::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<ThemeValue, E> {
        Ok(ThemeValue::String(value))
    }

    fn visit_unit<E>(self) -> Result<ThemeValue, E> {
        Ok(ThemeValue::Null)
    }

    fn visit_none<E>(self) -> Result<ThemeValue, E> {
        Ok(ThemeValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<ThemeValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<ThemeValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));

        while let Some(item) = seq.next_element()? {
            items.push(item);
        }

        Ok(ThemeValue::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<ThemeValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));

        // Duplicate keys keep the first position and the last value.
        while let Some((key, value)) = map.next_entry::<String, ThemeValue>()? {
            entries.insert(key, value);
        }

        Ok(ThemeValue::Map(entries))
    }
}
