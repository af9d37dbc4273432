use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_CATEGORY, DEFAULT_CITY, DEFAULT_USER_AGENT};
use crate::data_models::SearchPayload;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Inputs of a single web-search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub base_url: String,
    pub city: String,
    pub category: String,
    pub cursor: i64,
    pub user_agent: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            base_url: DEFAULT_BASE_URL.to_string(),
            city: DEFAULT_CITY.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            cursor: 0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&Config> for SearchParams {
    fn from(config: &Config) -> Self {
        SearchParams {
            base_url: config.base_url.clone(),
            city: config.city.clone(),
            category: config.category.clone(),
            cursor: config.cursor,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl SearchParams {
    /// Same search, another page. Feed it the cursor the previous page
    /// handed back.
    pub fn with_cursor(&self, cursor: i64) -> SearchParams {
        SearchParams {
            cursor,
            ..self.clone()
        }
    }
}

/// A fully assembled POST, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: SearchPayload,
}

impl SearchRequest {
    pub fn build(params: &SearchParams) -> SearchRequest {
        let url = format!(
            "{}/{}/{}",
            params.base_url.trim_end_matches('/'),
            params.city,
            params.category
        );

        let headers = vec![
            ("User-Agent".to_string(), params.user_agent.clone()),
            ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
            ("Accept".to_string(), JSON_CONTENT_TYPE.to_string()),
        ];

        SearchRequest {
            url,
            headers,
            body: SearchPayload::new(params.category.clone(), params.cursor),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The JSON body exactly as the transport puts it on the wire.
    pub fn body_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_targets_karaj_real_estate() {
        let req = SearchRequest::build(&SearchParams::default());
        assert_eq!(
            req.url,
            "https://api.divar.ir/v8/web-search/karaj/real-estate"
        );
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("Accept"), Some("application/json"));
        assert_eq!(req.header("User-Agent"), Some(DEFAULT_USER_AGENT));
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let params = SearchParams {
            base_url: "http://127.0.0.1:8080/v8/web-search/".to_string(),
            city: "tehran".to_string(),
            ..SearchParams::default()
        };
        let req = SearchRequest::build(&params);
        assert_eq!(req.url, "http://127.0.0.1:8080/v8/web-search/tehran/real-estate");
    }

    #[test]
    fn with_cursor_only_moves_the_cursor() {
        let first = SearchParams::default();
        let next = first.with_cursor(1712345678);
        assert_eq!(next.cursor, 1712345678);
        assert_eq!(next.city, first.city);
        assert_eq!(SearchRequest::build(&next).body.last_post_date, 1712345678);
    }
}
