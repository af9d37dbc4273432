use serde::{Deserialize, Serialize};

/// JSON body of a web-search call.
///
/// Field order is fixed by the struct layout, so serializing the same
/// payload twice yields identical bytes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchPayload {
    pub json_schema: JsonSchema,
    /// Pagination cursor. 0 asks for the first page.
    #[serde(rename = "last-post-date")]
    pub last_post_date: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonSchema {
    pub category: CategoryFilter,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub value: String,
}

impl SearchPayload {
    pub fn new(category: impl Into<String>, last_post_date: i64) -> SearchPayload {
        SearchPayload {
            json_schema: JsonSchema {
                category: CategoryFilter {
                    value: category.into(),
                },
            },
            last_post_date,
        }
    }
}

/// Status and raw text of whatever the server answered. The body is never
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status_code: u16,
    pub body_text: String,
}

impl RawResponse {
    pub fn new(status_code: u16, body_text: String) -> RawResponse {
        RawResponse {
            status_code,
            body_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_hyphenated_cursor_key() {
        let payload = SearchPayload::new("real-estate", 0);
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"json_schema":{"category":{"value":"real-estate"}},"last-post-date":0}"#
        );
    }

    #[test]
    fn payload_reads_back_from_json() {
        let payload: SearchPayload = serde_json::from_str(
            r#"{"last-post-date": 1700000000, "json_schema": {"category": {"value": "rent-apartment"}}}"#,
        )
        .unwrap();
        assert_eq!(payload.json_schema.category.value, "rent-apartment");
        assert_eq!(payload.last_post_date, 1700000000);
    }
}
