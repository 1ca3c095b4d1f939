//! Custom Search request types and validation.

use serde::Serialize;

use crate::search::SearchError;

/// Query parameters for the Custom Search JSON API.
///
/// https://developers.google.com/custom-search/v1/reference/rest/v1/cse/list
#[derive(Clone, Serialize)]
pub struct SearchRequest {
    /// API key.
    pub key: String,

    /// Programmable search engine id.
    pub cx: String,

    /// Search query (required, max 2048 chars).
    pub q: String,

    /// 1-based index of the first result (1-91, default 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u8>,

    /// Number of results (1-10, default 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num: Option<u8>,
}

impl std::fmt::Debug for SearchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchRequest")
            .field("key", &"<redacted>")
            .field("cx", &self.cx)
            .field("q", &self.q)
            .field("start", &self.start)
            .field("num", &self.num)
            .finish()
    }
}

impl SearchRequest {
    /// Restrict `query` to pages under `domain`.
    pub fn site_query(domain: &str, query: &str) -> String {
        format!("site:{domain} {query}")
    }

    /// Validate the search request parameters.
    ///
    /// Returns an error if any parameters are out of range or malformed.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.key.is_empty() {
            return Err(SearchError::MissingCredentials("key".to_string()));
        }

        if self.cx.is_empty() {
            return Err(SearchError::MissingCredentials("cx".to_string()));
        }

        if self.q.trim().is_empty() {
            return Err(SearchError::InvalidQuery("query cannot be empty".to_string()));
        }

        if self.q.len() > 2048 {
            return Err(SearchError::InvalidQuery(format!("query too long: {} chars (max 2048)", self.q.len())));
        }

        if let Some(num) = self.num
            && !(1..=10).contains(&num)
        {
            return Err(SearchError::InvalidNum);
        }

        if let Some(start) = self.start
            && !(1..=91).contains(&start)
        {
            return Err(SearchError::InvalidStart);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(q: &str) -> SearchRequest {
        SearchRequest { key: "key".into(), cx: "cx".into(), q: q.into(), start: Some(1), num: Some(1) }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("site:ambitionbox.com google").validate().is_ok());
    }

    #[test]
    fn test_site_query() {
        assert_eq!(SearchRequest::site_query("ambitionbox.com", "Tata Motors"), "site:ambitionbox.com Tata Motors");
    }

    #[test]
    fn test_empty_query() {
        assert!(matches!(request("   ").validate(), Err(SearchError::InvalidQuery(_))));
    }

    #[test]
    fn test_query_too_long() {
        assert!(request(&"a".repeat(2049)).validate().is_err());
    }

    #[test]
    fn test_missing_credentials() {
        let req = SearchRequest { key: String::new(), ..request("x") };
        assert!(matches!(req.validate(), Err(SearchError::MissingCredentials(_))));
    }

    #[test]
    fn test_invalid_num() {
        let req = SearchRequest { num: Some(11), ..request("x") };
        assert!(matches!(req.validate(), Err(SearchError::InvalidNum)));
    }

    #[test]
    fn test_invalid_start() {
        let req = SearchRequest { start: Some(0), ..request("x") };
        assert!(matches!(req.validate(), Err(SearchError::InvalidStart)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", request("x"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("\"key\""));
    }
}
