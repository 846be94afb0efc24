use std::sync::Arc;

use crate::services::search_proxy::SearchProxy;

#[derive(Clone)]
pub struct AppState {
    pub proxy: SearchProxy,
    /// HTML served at `/`, resolved once at startup.
    pub landing_page: Arc<str>,
    pub public_dir: String,
}
