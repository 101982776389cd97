pub mod theme;

pub mod tokens;

pub use theme_value::{NormalizedValue, ThemeValue, ValueKind, process_value};
