pub mod item_mapper;
pub mod mock_catalog;
pub mod search_proxy;

pub use item_mapper::{map_item, map_items};
pub use mock_catalog::{mock_items, FALLBACK_ERROR, MOCK_CATALOG};
pub use search_proxy::SearchProxy;
