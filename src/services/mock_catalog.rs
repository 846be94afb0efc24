//! Fixed catalog served when the upstream search cannot be used.

use crate::models::Item;

pub const FALLBACK_ERROR: &str = "Unable to access Wellcome API, showing mock data";

/// Static form of an `Item`, so the catalog can live in a `const`.
#[derive(Debug)]
pub struct MockItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub original_price: Option<&'static str>,
    pub promotags: &'static [&'static str],
    pub image_url: &'static str,
    pub brand: &'static str,
    pub description: &'static str,
}

pub const MOCK_CATALOG: [MockItem; 3] = [
    MockItem {
        id: "mock1",
        name: "Lay's Potato Chips Original",
        price: "HK$12.90",
        original_price: Some("HK$15.90"),
        promotags: &["20% OFF", "SPECIAL OFFER"],
        image_url: "",
        brand: "Lay's",
        description: "Classic original flavor potato chips",
    },
    MockItem {
        id: "mock2",
        name: "Pringles Sour Cream & Onion",
        price: "HK$18.50",
        original_price: Some("HK$22.90"),
        promotags: &["BUY 2 GET 1 FREE"],
        image_url: "",
        brand: "Pringles",
        description: "Delicious sour cream and onion flavored chips",
    },
    MockItem {
        id: "mock3",
        name: "Calbee Potato Chips Seaweed",
        price: "HK$8.90",
        original_price: None,
        promotags: &["NEW ARRIVAL"],
        image_url: "",
        brand: "Calbee",
        description: "Japanese style seaweed flavored potato chips",
    },
];

impl From<&MockItem> for Item {
    fn from(m: &MockItem) -> Self {
        Item {
            id: m.id.to_string(),
            name: m.name.to_string(),
            price: m.price.to_string(),
            original_price: m.original_price.map(str::to_string),
            promotags: m.promotags.iter().map(|t| t.to_string()).collect(),
            image_url: Some(m.image_url.to_string()),
            brand: Some(m.brand.to_string()),
            description: Some(m.description.to_string()),
        }
    }
}

pub fn mock_items() -> Vec<Item> {
    MOCK_CATALOG.iter().map(Item::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_ids_in_order() {
        let ids: Vec<String> = mock_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["mock1", "mock2", "mock3"]);
    }

    #[test]
    fn test_mock_json_shape() {
        let value = serde_json::to_value(mock_items()).unwrap();
        assert_eq!(
            value[2],
            json!({
                "id": "mock3",
                "name": "Calbee Potato Chips Seaweed",
                "price": "HK$8.90",
                "originalPrice": null,
                "promotags": ["NEW ARRIVAL"],
                "imageUrl": "",
                "brand": "Calbee",
                "description": "Japanese style seaweed flavored potato chips"
            })
        );
        assert_eq!(value[0]["promotags"], json!(["20% OFF", "SPECIAL OFFER"]));
        assert_eq!(value[1]["originalPrice"], json!("HK$22.90"));
    }
}
