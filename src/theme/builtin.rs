use anyhow::{Context, Result};

use crate::{
    theme::ThemeConfig,
    tokens::{TokenSources, TokenTable},
};

/// Combines every [`TokenTable`] from `sources` into one configuration, in the
/// order of [`TokenTable::ALL`].
pub fn custom_theme_config<const N: usize>(sources: &TokenSources<N>) -> Result<ThemeConfig> {
    let mut config = ThemeConfig::new();

    for table in TokenTable::ALL {
        let value = sources.load_table(table)?;
        table
            .apply(&mut config, value)
            .with_context(|| format!("token table \"{}\" cannot be merged", table.file()))?;
    }

    Ok(config)
}

cfg_if::cfg_if!(
    if #[cfg(feature = "embedded-tokens")] {
        use std::sync::LazyLock;

        use crate::{theme::NormalizedTheme, tokens::EmbeddedTokens};

        static CUSTOM_THEME: LazyLock<Result<NormalizedTheme>> = LazyLock::new(build_custom_theme);

        fn build_custom_theme() -> Result<NormalizedTheme> {
            let config = custom_theme_config(&crate::token_sources![EmbeddedTokens])?;
            log::debug!("built custom theme from {} token tables", TokenTable::ALL.len());
            Ok(config.extend())
        }

        /// The theme built from the bundled token tables.
        ///
        /// Built once, on first access.
        pub fn custom_theme() -> Result<&'static NormalizedTheme, &'static anyhow::Error> {
            CUSTOM_THEME.as_ref()
        }
    }
);
