//! Token tables and the providers they are loaded from.

mod sources;
pub use sources::*;

mod table;
pub use table::*;

cfg_if::cfg_if!(
    if #[cfg(feature = "embedded-tokens")] {
        mod embedded_tokens;
        pub use embedded_tokens::*;
    }
);
