/// Convert a JSON value to a short string representation
pub fn value_to_short_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Object(obj) => {
            let mut parts = Vec::new();
            for (key, val) in obj {
                parts.push(format!("{}: {}", key, value_to_short_string(val)));
            }
            parts.join(", ")
        }
        serde_json::Value::Null => String::new(),
    }
}

/// Loose "has a value" check for upstream fields.
/// `null`, `false`, zero and `""` count as missing; lists and objects never do.
pub fn is_present(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_string_renders_numbers_and_lists() {
        assert_eq!(value_to_short_string(&json!(12.9)), "12.9");
        assert_eq!(value_to_short_string(&json!(["a", 1])), "a, 1");
        assert_eq!(value_to_short_string(&json!(null)), "");
    }

    #[test]
    fn test_is_present() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(false)));
        assert!(is_present(&json!("x")));
        assert!(is_present(&json!(3)));
        assert!(is_present(&json!([])));
        assert!(is_present(&json!({})));
    }
}
