//! Response model of `/api/get-headers`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Placeholder used when the server rejected the file without a message.
pub const PARSE_ERROR: &str = "Could not parse file.";

/// Placeholder used when the request itself failed.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Check console for details.";

/// Body returned by the header discovery endpoint.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HeadersResponse {
    /// Column names in file order. Spreadsheet headers are not always text,
    /// so non-string entries are kept with their JSON text.
    #[serde(default, deserialize_with = "header_names")]
    pub headers: Option<Vec<String>>,
    /// Rejection reason, reduced to text with the same rules as conversion
    /// errors.
    #[serde(default)]
    pub error: Option<Value>,
}

/// Why header discovery did not produce a column list.
#[derive(Clone, Debug, PartialEq)]
pub enum HeadersFailure {
    Rejected { status: u16, message: Option<String> },
    Transport(String),
}

impl HeadersFailure {
    /// Inline text rendered in the column container.
    pub fn placeholder_message(&self) -> String {
        match self {
            HeadersFailure::Rejected { message, .. } => {
                format!("Error: {}", message.as_deref().unwrap_or(PARSE_ERROR))
            }
            HeadersFailure::Transport(_) => UNEXPECTED_ERROR.to_string(),
        }
    }
}

impl fmt::Display for HeadersFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadersFailure::Rejected { status, message } => write!(
                f,
                "header discovery rejected with status {}: {}",
                status,
                message.as_deref().unwrap_or("<no message>")
            ),
            HeadersFailure::Transport(detail) => write!(f, "header request failed: {}", detail),
        }
    }
}

impl std::error::Error for HeadersFailure {}

/// Interprets a finished header discovery request. A missing `headers`
/// field on success is read as an empty list.
pub fn interpret_headers(
    status: u16,
    body: Result<HeadersResponse, String>,
) -> Result<Vec<String>, HeadersFailure> {
    let response = body.map_err(HeadersFailure::Transport)?;
    if super::conversion::is_success(status) {
        Ok(response.headers.unwrap_or_default())
    } else {
        Err(HeadersFailure::Rejected {
            status,
            message: super::message_text(response.error),
        })
    }
}

fn header_names<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|values| values.into_iter().map(header_text).collect()))
}

fn header_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> HeadersResponse {
        serde_json::from_str(body).expect("valid headers body")
    }

    #[test]
    fn headers_keep_file_order() {
        let headers = interpret_headers(200, Ok(parse(r#"{"headers":["Name","Email","Joined At"]}"#)));
        assert_eq!(
            headers,
            Ok(vec!["Name".to_string(), "Email".to_string(), "Joined At".to_string()])
        );
    }

    #[test]
    fn non_string_headers_use_json_text() {
        let headers = interpret_headers(200, Ok(parse(r#"{"headers":[2023, "Total", null]}"#)));
        assert_eq!(
            headers,
            Ok(vec!["2023".to_string(), "Total".to_string(), String::new()])
        );
    }

    #[test]
    fn missing_headers_on_success_is_empty() {
        assert_eq!(interpret_headers(200, Ok(parse("{}"))), Ok(Vec::new()));
        assert_eq!(interpret_headers(200, Ok(parse(r#"{"headers":null}"#))), Ok(Vec::new()));
    }

    #[test]
    fn rejection_message_and_fallback() {
        let failure = interpret_headers(400, Ok(parse(r#"{"error":"Invalid or no file selected"}"#)))
            .expect_err("rejected");
        assert_eq!(failure.placeholder_message(), "Error: Invalid or no file selected");

        let failure = interpret_headers(500, Ok(parse("{}"))).expect_err("rejected");
        assert_eq!(failure.placeholder_message(), "Error: Could not parse file.");
    }

    #[test]
    fn numeric_error_is_rendered_as_text() {
        let failure = interpret_headers(400, Ok(parse(r#"{"error":413}"#))).expect_err("rejected");
        assert_eq!(failure.placeholder_message(), "Error: 413");
    }

    #[test]
    fn transport_failure_uses_generic_placeholder() {
        let failure = interpret_headers(200, Err("unexpected end of input".to_string()))
            .expect_err("malformed");
        assert_eq!(failure.placeholder_message(), UNEXPECTED_ERROR);
    }
}
