pub mod error;
pub mod pages;
pub mod search;

pub use error::ApiError;
