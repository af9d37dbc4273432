use std::io::Write;

use crate::data_models::RawResponse;
use crate::error::Result;

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Writes the status code, then up to `body_limit` characters of the body,
/// each followed by a newline.
pub fn report<W: Write>(out: &mut W, response: &RawResponse, body_limit: usize) -> Result<()> {
    writeln!(out, "{}", response.status_code)?;
    writeln!(out, "{}", truncate_chars(&response.body_text, body_limit))?;
    out.flush()?;
    Ok(())
}
