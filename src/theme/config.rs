use indexmap::IndexMap;
use serde::Serialize;
use theme_value::ThemeValue;

use crate::theme::{NormalizedTheme, ThemeError, extend_theme};

/// Raw token categories, in the order they were added.
///
/// Replacing a category keeps its original position, the same way a later
/// object spread overrides an earlier key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThemeConfig(IndexMap<String, ThemeValue>);

impl ThemeConfig {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Parses a JSON document whose root is an object of token categories.
    pub fn from_json_str<S: AsRef<str>>(str: S) -> Result<Self, ThemeError> {
        let value: ThemeValue = serde_json::from_str(str.as_ref())?;
        Self::try_from(value)
    }

    pub fn with_category(mut self, name: impl Into<String>, value: impl Into<ThemeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ThemeValue>,
    ) -> Option<ThemeValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Adds every top-level entry of `table` as its own category.
    pub fn spread(&mut self, table: ThemeValue) -> Result<(), ThemeError> {
        match table {
            ThemeValue::Map(entries) => {
                self.0.extend(entries);
                Ok(())
            }
            other => Err(ThemeError::NotAMapping { found: other.kind() }),
        }
    }

    pub fn with_spread(mut self, table: impl Into<ThemeValue>) -> Result<Self, ThemeError> {
        self.spread(table.into())?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&ThemeValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ThemeValue)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalizes every category. See [`extend_theme`].
    pub fn extend(&self) -> NormalizedTheme {
        extend_theme(self)
    }
}

impl TryFrom<ThemeValue> for ThemeConfig {
    type Error = ThemeError;

    fn try_from(value: ThemeValue) -> Result<Self, Self::Error> {
        match value {
            ThemeValue::Map(entries) => Ok(Self(entries)),
            other => Err(ThemeError::NotAMapping { found: other.kind() }),
        }
    }
}

impl<K: Into<String>, V: Into<ThemeValue>> FromIterator<(K, V)> for ThemeConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for ThemeConfig {
    type Item = (String, ThemeValue);
    type IntoIter = indexmap::map::IntoIter<String, ThemeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ThemeConfig {
    type Item = (&'a String, &'a ThemeValue);
    type IntoIter = indexmap::map::Iter<'a, String, ThemeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
