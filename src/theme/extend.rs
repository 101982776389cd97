use indexmap::IndexMap;
use serde::Serialize;
use theme_value::{NormalizedValue, process_value};

use crate::theme::{ThemeConfig, ThemeError};

/// Normalizes every category of `config` with [`process_value`].
///
/// The result has exactly the categories of `config`, in the same order.
pub fn extend_theme(config: &ThemeConfig) -> NormalizedTheme {
    log::debug!("extending theme with {} token categories", config.len());

    NormalizedTheme(
        config
            .iter()
            .map(|(name, value)| (name.clone(), process_value(value)))
            .collect(),
    )
}

/// Token categories ready for a styling system's configuration loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedTheme(IndexMap<String, NormalizedValue>);

impl NormalizedTheme {
    pub fn get(&self, name: &str) -> Option<&NormalizedValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NormalizedValue)> {
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

    pub fn into_inner(self) -> IndexMap<String, NormalizedValue> {
        self.0
    }

    pub fn to_json_string(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use theme_value::ThemeValue;

    fn config(value: serde_json::Value) -> ThemeConfig {
        ThemeConfig::try_from(ThemeValue::from(value)).unwrap()
    }

    #[test]
    fn test_numbers_inside_categories_become_strings() {
        let theme = extend_theme(&config(json!({ "a": { "b": 1 }, "c": "x" })));
        assert_eq!(theme.to_json_string().unwrap(), r#"{"a":{"b":"1"},"c":"x"}"#);
    }

    #[test]
    fn test_sequences_are_kept_verbatim() {
        let theme = extend_theme(&config(json!({ "z": [1, "2px"] })));
        assert_eq!(theme.to_json_string().unwrap(), r#"{"z":[1,"2px"]}"#);
    }

    #[test]
    fn test_empty_config_gives_empty_theme() {
        let theme = extend_theme(&ThemeConfig::new());
        assert!(theme.is_empty());
        assert_eq!(theme.to_json_string().unwrap(), "{}");
    }

    #[test]
    fn test_top_level_scalars_are_coerced() {
        let raw = json!({ "opacity": 0.5, "enabled": true, "unset": null });
        let theme = extend_theme(&config(raw));
        assert_eq!(theme.get("opacity").and_then(NormalizedValue::as_str), Some("0.5"));
        assert_eq!(theme.get("enabled").and_then(NormalizedValue::as_str), Some("true"));
        assert_eq!(theme.get("unset").and_then(NormalizedValue::as_str), Some("null"));
    }

    #[test]
    fn test_category_names_and_order_are_kept() {
        let raw = json!({ "zIndex": 1, "colors": {}, "boxShadow": "none", "screens": [] });
        let config = config(raw);
        let theme = config.extend();

        assert_eq!(theme.len(), config.len());
        assert!(theme.keys().eq(config.keys()));
    }

    #[test]
    fn test_random_category_names_survive_extension() {
        use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut names: Vec<String> = (0..64).map(|index| format!("category{index}")).collect();

        for _ in 0..32 {
            names.shuffle(&mut rng);
            let len = rng.random_range(0..names.len());
            let config: ThemeConfig = names[..len]
                .iter()
                .map(|name| (name.clone(), rng.random_range(0..10_000)))
                .collect();

            let theme = config.extend();
            assert!(theme.keys().eq(names[..len].iter()));
            assert!(theme.iter().all(|(_, value)| value.as_str().is_some()));
        }
    }

    #[test]
    fn test_into_inner_exposes_normalized_values() {
        let inner = extend_theme(&config(json!({ "zIndex": { "modal": 1400 } }))).into_inner();
        assert_eq!(
            inner["zIndex"].get("modal"),
            Some(&NormalizedValue::String("1400".to_owned()))
        );
    }

    #[test]
    fn test_pretty_json_output() {
        let theme = extend_theme(&config(json!({ "screens": { "sm": "640px" } })));
        assert_eq!(
            theme.to_json_string_pretty().unwrap(),
            "{\n  \"screens\": {\n    \"sm\": \"640px\"\n  }\n}"
        );
    }
}
