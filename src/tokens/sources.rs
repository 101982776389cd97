use std::borrow::Cow;

use anyhow::{Context, Result, anyhow};
use indexmap::IndexMap;
use smallvec::SmallVec;
use theme_value::ThemeValue;

use crate::tokens::TokenTable;

/// Somewhere token tables can be read from.
pub trait TokenProvider: Send + Sync {
    /// Returns the raw JSON document named `name`, if this provider has it.
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>>;

    /// Lists the names of the documents starting with `prefix`.
    fn list(&self, prefix: &str) -> Vec<String>;
}

/// An ordered set of providers. Earlier providers win.
pub struct TokenSources<const N: usize> {
    providers: SmallVec<[Box<dyn TokenProvider>; N]>,
}

impl<const N: usize> TokenSources<N> {
    pub fn new(providers: [Box<dyn TokenProvider>; N]) -> TokenSources<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }

    /// Loads and parses the token table named `name`.
    pub fn load(&self, name: &str) -> Result<ThemeValue> {
        for provider in &self.providers {
            if let Some(document) = provider.get(name) {
                log::debug!("loading token table \"{name}\"");

                return serde_json::from_slice(&document)
                    .with_context(|| format!("token table \"{name}\" is not valid JSON"));
            }
        }

        Err(anyhow!("could not find token table \"{name}\""))
    }

    pub fn load_table(&self, table: TokenTable) -> Result<ThemeValue> {
        self.load(table.file())
    }

    pub fn list(&self, prefix: &str) -> Vec<String> {
        self.providers
            .iter()
            .flat_map(|provider| provider.list(prefix))
            .collect()
    }
}

#[macro_export]
macro_rules! token_sources {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::tokens::TokenSources::new([
            $( Box::new($item) ),*
        ])
    };
}

/// Token tables held in memory, keyed by document name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokens {
    documents: IndexMap<String, Cow<'static, [u8]>>,
}

impl InMemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: impl Into<String>, json: impl Into<String>) -> Self {
        self.documents
            .insert(name.into(), Cow::Owned(json.into().into_bytes()));
        self
    }
}

impl TokenProvider for InMemoryTokens {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        self.documents.get(name).cloned()
    }

    fn list(&self, prefix: &str) -> Vec<String> {
        self.documents
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_provider_with_the_table_wins() {
        let sources = crate::token_sources![
            InMemoryTokens::new().with_table("screens.json", r#"{ "sm": "600px" }"#),
            InMemoryTokens::new()
                .with_table("screens.json", r#"{ "sm": "640px" }"#)
                .with_table("colors.json", r##"{ "red": "#f00" }"##),
        ];

        let screens = sources.load("screens.json").unwrap();
        assert_eq!(screens.get("sm"), Some(&ThemeValue::from("600px")));

        let colors = sources.load("colors.json").unwrap();
        assert_eq!(colors.get("red"), Some(&ThemeValue::from("#f00")));
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let sources = crate::token_sources![InMemoryTokens::new()];
        let error = sources.load("shadows.json").unwrap_err();
        assert_eq!(error.to_string(), "could not find token table \"shadows.json\"");
    }

    #[test]
    fn test_malformed_table_reports_its_name() {
        let sources =
            crate::token_sources![InMemoryTokens::new().with_table("colors.json", "{ \"red\": ")];
        let error = sources.load_table(TokenTable::Colors).unwrap_err();
        assert_eq!(error.to_string(), "token table \"colors.json\" is not valid JSON");
    }

    #[test]
    fn test_list_concatenates_providers() {
        let sources = crate::token_sources![
            InMemoryTokens::new()
                .with_table("colors.json", "{}")
                .with_table("screens.json", "{}"),
            InMemoryTokens::new().with_table("colors-dark.json", "{}"),
        ];
        assert_eq!(sources.list("colors"), ["colors.json", "colors-dark.json"]);
        assert_eq!(sources.list("").len(), 3);
    }
}
