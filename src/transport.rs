use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

use crate::data_models::RawResponse;
use crate::error::{ProbeError, Result};
use crate::request::SearchRequest;

/// Sends search requests. One POST per `send`, no retries.
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    /// `timeout` bounds the whole exchange. `None` waits as long as the
    /// server takes.
    pub fn new(timeout: Option<Duration>) -> Result<Transport> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Transport { client })
    }

    /// Any status the server answers with comes back as `Ok`, 4xx and 5xx
    /// included. Only failures to complete the exchange are errors.
    pub async fn send(&self, request: &SearchRequest) -> Result<RawResponse> {
        let headers = header_map(request)?;

        log::info!("POST {}", request.url);
        let res = self
            .client
            .post(&request.url)
            .headers(headers)
            .json(&request.body)
            .send()
            .await?;

        let status_code = res.status().as_u16();
        let body_text = res.text().await?;
        log::debug!(
            "received status {status_code} with {} bytes of body",
            body_text.len()
        );

        Ok(RawResponse::new(status_code, body_text))
    }
}

fn header_map(request: &SearchRequest) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(request.headers.len());
    for (name, value) in &request.headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ProbeError::InvalidHeader {
                name: name.clone(),
                source: Box::new(e),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| ProbeError::InvalidHeader {
                name: name.clone(),
                source: Box::new(e),
            })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SearchParams;

    #[test]
    fn header_map_carries_every_request_header() {
        let req = SearchRequest::build(&SearchParams::default());
        let headers = header_map(&req).unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["accept"], "application/json");
    }

    #[test]
    fn newline_in_user_agent_is_rejected() {
        let params = SearchParams {
            user_agent: "Android\nApp".to_string(),
            ..SearchParams::default()
        };
        let req = SearchRequest::build(&params);
        let err = header_map(&req).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidHeader { ref name, .. } if name == "User-Agent"));
    }
}
