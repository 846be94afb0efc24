pub mod app_state;
pub mod item;
pub mod search_query;
pub mod search_result;

pub use app_state::AppState;
pub use item::Item;
pub use search_query::{QueryError, SearchParams, SearchQuery};
pub use search_result::SearchResult;
