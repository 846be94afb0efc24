// JSON utilities
pub mod json_converter;

pub use json_converter::{is_present, value_to_short_string};
