//! Loosely typed design-token values and their normalization.
//!
//! Token tables are authored with whatever scalar is natural (numbers for
//! z-indices and font weights, strings for colors). A styling system consumes
//! only strings and ordered sequences at the leaves, so [`process_value`]
//! reconciles the two.

mod value;
pub use value::*;

mod deserializers;

mod normalize;
pub use normalize::*;
