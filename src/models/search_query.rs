use serde::Deserialize;
use thiserror::Error;

use crate::config::{DEFAULT_KEYWORD, DEFAULT_PAGE};

/// Raw `/api/search` query string, before defaults and validation.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub page: Option<String>,
}

impl SearchParams {
    /// Build from decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "keyword" => &mut params.keyword,
                "page" => &mut params.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("page must be a positive integer, got '{0}'")]
    InvalidPage(String),
}

/// A resolved search request: defaults applied, page validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
            page: DEFAULT_PAGE,
        }
    }
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, page: u32) -> Self {
        Self { keyword: keyword.into(), page }
    }
}

impl TryFrom<SearchParams> for SearchQuery {
    type Error = QueryError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let keyword = match params.keyword {
            Some(k) if !k.trim().is_empty() => k,
            _ => DEFAULT_KEYWORD.to_string(),
        };
        let page = parse_page(params.page.as_deref())?;
        Ok(Self { keyword, page })
    }
}

/// Blank or missing means the first page; anything else must be a positive integer.
pub fn parse_page(raw: Option<&str>) -> Result<u32, QueryError> {
    let t = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_PAGE),
        Some(t) => t,
    };
    match t.parse::<u32>() {
        Ok(0) | Err(_) => Err(QueryError::InvalidPage(t.to_string())),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(keyword: Option<&str>, page: Option<&str>) -> SearchParams {
        SearchParams {
            keyword: keyword.map(str::to_string),
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let q = SearchQuery::try_from(params(None, None)).unwrap();
        assert_eq!(q, SearchQuery::default());
        assert_eq!(q.keyword, "potato chip");
        assert_eq!(q.page, 1);
    }

    #[test]
    fn test_blank_keyword_uses_default() {
        let q = SearchQuery::try_from(params(Some("   "), Some("2"))).unwrap();
        assert_eq!(q.keyword, "potato chip");
        assert_eq!(q.page, 2);
    }

    #[test]
    fn test_keyword_is_kept_verbatim() {
        let q = SearchQuery::try_from(params(Some(" cola "), None)).unwrap();
        assert_eq!(q.keyword, " cola ");
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let pairs = vec![
            ("keyword".to_string(), "a".to_string()),
            ("utm".to_string(), "x".to_string()),
            ("keyword".to_string(), "b".to_string()),
            ("page".to_string(), "2".to_string()),
            ("page".to_string(), "oops".to_string()),
        ];
        let q = SearchQuery::try_from(SearchParams::from_pairs(pairs)).unwrap();
        assert_eq!(q, SearchQuery::new("a", 2));
    }

    #[test]
    fn test_parse_page_accepts_padded_number() {
        assert_eq!(parse_page(Some(" 7 ")).unwrap(), 7);
        assert_eq!(parse_page(Some("")).unwrap(), 1);
    }

    #[test]
    fn test_parse_page_rejects_zero_negative_and_text() {
        assert!(matches!(parse_page(Some("0")), Err(QueryError::InvalidPage(_))));
        assert!(matches!(parse_page(Some("-3")), Err(QueryError::InvalidPage(_))));
        assert!(matches!(parse_page(Some("two")), Err(QueryError::InvalidPage(_))));
        assert!(matches!(parse_page(Some("1.5")), Err(QueryError::InvalidPage(_))));
    }
}
