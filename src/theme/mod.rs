//! Theme configuration and its normalization.
//!
//! A [`ThemeConfig`] collects raw token categories; [`extend_theme`] turns it
//! into a [`NormalizedTheme`] whose leaves are strings or sequences only.

mod config;
pub use config::*;

mod error;
pub use error::*;

mod extend;
pub use extend::*;

mod builtin;
pub use builtin::*;
