//! Combat resolver - entry point tying validation, analytics and simulation together

mod resolution;

pub use resolution::{calculate, calculate_normalized, calculate_with_config};
