//! Custom Search response types and normalization.

use serde::{Deserialize, Serialize};

/// Raw response from the Custom Search JSON API.
#[derive(Debug, Deserialize)]
pub struct CseApiResponse {
    /// Absent entirely when nothing matched.
    #[serde(default)]
    pub items: Vec<CseItem>,
}

/// Individual search hit.
#[derive(Debug, Deserialize)]
pub struct CseItem {
    pub link: String,
    #[serde(default)]
    pub title: String,
}

/// Normalized search response for internal use.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// Normalized search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
}

impl From<CseApiResponse> for SearchResponse {
    fn from(raw: CseApiResponse) -> Self {
        let results = raw.items.into_iter().map(|item| SearchResult { title: item.title, link: item.link }).collect();

        SearchResponse { results }
    }
}

impl SearchResponse {
    /// The top-ranked result.
    pub fn top(&self) -> Option<&SearchResult> {
        self.results.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "kind": "customsearch#search",
        "searchInformation": {"searchTime": 0.21, "totalResults": "1340"},
        "items": [
            {
                "kind": "customsearch#result",
                "title": "Google Reviews by Employees | AmbitionBox",
                "link": "https://www.ambitionbox.com/reviews/google-reviews",
                "snippet": "Google has been rated 4.4 out of 5"
            },
            {
                "title": "Google Salaries",
                "link": "https://www.ambitionbox.com/salaries/google-salaries"
            }
        ]
    }"#;

    #[test]
    fn test_deserialize_cse_response() {
        let response: CseApiResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].link, "https://www.ambitionbox.com/reviews/google-reviews");
    }

    #[test]
    fn test_normalize_to_search_response() {
        let raw: CseApiResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        let normalized: SearchResponse = raw.into();

        let top = normalized.top().unwrap();
        assert_eq!(top.link, "https://www.ambitionbox.com/reviews/google-reviews");
        assert_eq!(top.title, "Google Reviews by Employees | AmbitionBox");
    }

    #[test]
    fn test_missing_items() {
        let json = r#"{"searchInformation": {"totalResults": "0"}}"#;
        let raw: CseApiResponse = serde_json::from_str(json).unwrap();
        let normalized: SearchResponse = raw.into();

        assert!(normalized.top().is_none());
    }
}
