use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::tokens::TokenProvider;

/// Token tables bundled with the crate.
#[derive(RustEmbed)]
#[folder = "tokens/"]
#[include = "*.json"]
pub struct EmbeddedTokens;

impl TokenProvider for EmbeddedTokens {
    fn get(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(name).map(|f| f.data)
    }

    fn list(&self, prefix: &str) -> Vec<String> {
        EmbeddedTokens::iter()
            .filter(|name| name.starts_with(prefix))
            .map(Cow::into_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenTable;

    #[test]
    fn test_every_table_is_embedded_and_parses() {
        let sources = crate::token_sources![EmbeddedTokens];

        for table in TokenTable::ALL {
            let value = sources
                .load_table(table)
                .unwrap_or_else(|error| panic!("{table:?}: {error:#}"));
            assert!(value.as_map().is_some(), "{table:?} should be a map");
        }
    }

    #[test]
    fn test_list_only_contains_json_documents() {
        let names = EmbeddedTokens.list("");
        assert_eq!(names.len(), TokenTable::ALL.len());
        assert!(names.iter().all(|name| name.ends_with(".json")));
    }
}
