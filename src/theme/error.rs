use theme_value::ValueKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("could not parse theme configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a map of token categories, found a {found}.")]
    NotAMapping { found: ValueKind },
}
