use axum::extract::State;
use axum::response::Html;
use std::path::Path;

use crate::models::AppState;

// Embed the default landing page in the binary
pub const DEFAULT_LANDING_PAGE: &str = include_str!("../../static/index.html");

pub async fn root_get(State(state): State<AppState>) -> Html<String> {
    Html(state.landing_page.to_string())
}

/// Pick the landing page HTML: an explicit file must be readable, otherwise
/// `<public_dir>/index.html` is used when present, else the embedded page.
pub fn load_landing_page(explicit: Option<&str>, public_dir: &str) -> std::io::Result<String> {
    if let Some(path) = explicit {
        return std::fs::read_to_string(path);
    }
    let candidate = Path::new(public_dir).join("index.html");
    match std::fs::read_to_string(&candidate) {
        Ok(html) => {
            tracing::info!("Loaded landing page from {}", candidate.display());
            Ok(html)
        }
        Err(_) => Ok(DEFAULT_LANDING_PAGE.to_string()),
    }
}
