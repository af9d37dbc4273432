pub mod config;
pub mod data_models;
pub mod error;
pub mod reporter;
pub mod request;
pub mod transport;

use std::io::Write;

pub use data_models::{RawResponse, SearchPayload};
pub use error::{ProbeError, Result};
pub use request::{SearchParams, SearchRequest};
pub use transport::Transport;

/// Builds the request, sends it once and writes the report to `out`.
///
/// A 4xx or 5xx answer is reported like any other; only transport and
/// output failures come back as errors, and nothing is written when the
/// exchange fails.
pub async fn probe<W: Write>(
    params: &SearchParams,
    transport: &Transport,
    out: &mut W,
    body_limit: usize,
) -> Result<RawResponse> {
    let request = SearchRequest::build(params);
    let response = transport.send(&request).await?;
    reporter::report(out, &response, body_limit)?;
    Ok(response)
}
