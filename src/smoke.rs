//! Manual smoke test against a running server.

use comfy_table::{modifiers, presets, ContentArrangement, Table};
use serde_json::Value;
use std::time::Duration;
use terminal_size::{terminal_size, Width};
use thiserror::Error;
use yansi::Paint;

use crate::utils::value_to_short_string;

pub const DEFAULT_SMOKE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Response is missing field '{0}'")]
    MissingField(&'static str),

    #[error("Field 'items' is not a list")]
    ItemsNotList,

    #[error("totalItems ({total}) does not match items length ({len})")]
    CountMismatch { total: u64, len: usize },
}

#[derive(Debug)]
pub struct SmokeReport {
    pub status: u16,
    pub envelope: Value,
}

/// Check the fields every `/api/search` response must carry.
pub fn check_envelope(envelope: &Value) -> Result<(), SmokeError> {
    for field in ["success", "keyword", "page", "totalItems", "items"] {
        if envelope.get(field).is_none() {
            return Err(SmokeError::MissingField(field));
        }
    }
    let items = envelope["items"].as_array().ok_or(SmokeError::ItemsNotList)?;
    let total = envelope["totalItems"].as_u64().ok_or(SmokeError::MissingField("totalItems"))?;
    if total as usize != items.len() {
        return Err(SmokeError::CountMismatch { total, len: items.len() });
    }
    Ok(())
}

pub async fn run_smoke_test(base_url: &str, keyword: &str, page: u32) -> Result<SmokeReport, SmokeError> {
    let client = reqwest::Client::builder()
        .user_agent(format!("DiscountEx-smoke/{}", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()?;

    let url = format!("{}/api/search", base_url.trim_end_matches('/'));
    let response = client
        .get(&url)
        .query(&[("keyword", keyword.to_string()), ("page", page.to_string())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SmokeError::Status(status.as_u16()));
    }
    let envelope: Value = response.json().await?;
    check_envelope(&envelope)?;

    Ok(SmokeReport { status: status.as_u16(), envelope })
}

pub fn print_report(report: &SmokeReport) {
    let e = &report.envelope;
    println!("{} {}", Paint::new("API Response Status:").green(), report.status);
    println!("{}", Paint::new("Response Data Structure:").green());
    println!("   - Success: {}", value_to_short_string(&e["success"]));
    println!("   - Keyword: {}", value_to_short_string(&e["keyword"]));
    println!("   - Page: {}", value_to_short_string(&e["page"]));
    println!("   - Total Items: {}", value_to_short_string(&e["totalItems"]));
    if let Some(err) = e.get("error").and_then(|v| v.as_str()) {
        println!("   - {}: {}", Paint::new("Error").yellow(), err);
    }

    if let Some(first) = e["items"].as_array().and_then(|items| items.first()) {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if let Some((Width(w), _)) = terminal_size() {
            table.set_width(w.saturating_sub(4));
        }
        table.set_header(vec!["Field", "Value"]);
        for field in ["id", "name", "price", "promotags", "brand"] {
            table.add_row(vec![field.to_string(), value_to_short_string(&first[field])]);
        }
        println!("\n{}\n{table}", Paint::new("First Item Structure:").green());
    }

    println!("\n{}", Paint::new("All checks passed. The API is working correctly.").green().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_envelope_accepts_fallback() {
        let body = json!({
            "success": false,
            "error": "x",
            "keyword": "potato chip",
            "page": 1,
            "totalItems": 1,
            "items": [{"id": "mock1"}]
        });
        assert!(check_envelope(&body).is_ok());
    }

    #[test]
    fn test_check_envelope_missing_field() {
        let body = json!({"success": true, "keyword": "a", "page": 1, "items": []});
        assert!(matches!(check_envelope(&body), Err(SmokeError::MissingField("totalItems"))));
    }

    #[test]
    fn test_check_envelope_items_not_list() {
        let body = json!({"success": true, "keyword": "a", "page": 1, "totalItems": 0, "items": {}});
        assert!(matches!(check_envelope(&body), Err(SmokeError::ItemsNotList)));
    }

    #[test]
    fn test_check_envelope_count_mismatch() {
        let body = json!({"success": true, "keyword": "a", "page": 1, "totalItems": 2, "items": []});
        assert!(matches!(check_envelope(&body), Err(SmokeError::CountMismatch { total: 2, len: 0 })));
    }
}
