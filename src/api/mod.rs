pub mod client;
pub mod error;
pub mod ware_search;

pub use client::{set_silent, UpstreamClient};
pub use error::{ClientBuildError, UpstreamError};
pub use ware_search::ware_search;
