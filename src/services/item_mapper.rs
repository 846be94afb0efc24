//! Normalization of upstream search items.
//!
//! Upstream field names are inconsistent, so every output field has an
//! ordered list of source keys. Candidates are tried left to right and the
//! first one holding a value wins.

use serde_json::{Map, Value};

use crate::api::UpstreamError;
use crate::models::Item;
use crate::utils::{is_present, value_to_short_string};

pub const ID_FIELDS: &[&str] = &["id"];
pub const NAME_FIELDS: &[&str] = &["name", "displayName"];
pub const PRICE_FIELDS: &[&str] = &["price", "currentPrice"];
pub const ORIGINAL_PRICE_FIELDS: &[&str] = &["originalPrice", "listPrice"];
pub const PROMOTAG_FIELDS: &[&str] = &["promotags", "promoTags"];
pub const IMAGE_URL_FIELDS: &[&str] = &["imageUrl", "image"];
pub const BRAND_FIELDS: &[&str] = &["brand"];
pub const DESCRIPTION_FIELDS: &[&str] = &["description"];

pub const DEFAULT_NAME: &str = "No name available";
pub const DEFAULT_PRICE: &str = "Price not available";

fn first_present<'a>(obj: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| is_present(v))
}

fn first_text(obj: &Map<String, Value>, candidates: &[&str]) -> Option<String> {
    first_present(obj, candidates).map(value_to_short_string)
}

// Single-source fields are copied as sent; only `null` counts as missing.
fn passthrough_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).filter(|v| !v.is_null()).map(value_to_short_string)
}

fn promo_tags(obj: &Map<String, Value>) -> Vec<String> {
    match first_present(obj, PROMOTAG_FIELDS) {
        Some(Value::Array(tags)) => tags
            .iter()
            .filter(|t| !t.is_null())
            .map(value_to_short_string)
            .collect(),
        Some(single) => vec![value_to_short_string(single)],
        None => Vec::new(),
    }
}

/// Map one upstream item object into an `Item`.
pub fn map_item(obj: &Map<String, Value>) -> Item {
    Item {
        id: passthrough_text(obj, ID_FIELDS[0]).unwrap_or_default(),
        name: first_text(obj, NAME_FIELDS).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        price: first_text(obj, PRICE_FIELDS).unwrap_or_else(|| DEFAULT_PRICE.to_string()),
        original_price: first_text(obj, ORIGINAL_PRICE_FIELDS),
        promotags: promo_tags(obj),
        image_url: first_text(obj, IMAGE_URL_FIELDS),
        brand: passthrough_text(obj, BRAND_FIELDS[0]),
        description: passthrough_text(obj, DESCRIPTION_FIELDS[0]),
    }
}

/// Extract and map `data.items` from an upstream payload.
///
/// A payload without `data.items` yields no items. An `items` value that is
/// not a list, or a list entry that is not an object, is a decode error.
pub fn map_items(payload: &Value) -> Result<Vec<Item>, UpstreamError> {
    let items = match payload.get("data").and_then(|d| d.get("items")) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(UpstreamError::Decode(format!(
                "data.items is not a list: {}",
                value_to_short_string(other)
            )))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            entry
                .as_object()
                .map(map_item)
                .ok_or_else(|| UpstreamError::Decode(format!("data.items[{}] is not an object", idx)))
        })
        .collect()
}
