//! Response model of the conversion endpoints and its interpretation.
//!
//! Every conversion endpoint (`/convert/list`, `/convert/json`,
//! `/convert/from-json`, `/convert/clipboard`) answers with a JSON object
//! carrying exactly one meaningful field: `download_url` when a file was
//! generated on the server, `data` when the result should be shown inline,
//! or `error` when the request was rejected. The HTTP status decides which
//! of these is read; field presence alone is never trusted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Alert text used when the server rejected a submission without a message.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Alert text used when the request itself failed (network, malformed body).
pub const SUBMISSION_ERROR: &str =
    "An error occurred while submitting the form. Please check the console.";

/// Raw body returned by a conversion endpoint.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ConversionResponse {
    /// Server path of a generated file, e.g. `/download/report_list.txt`.
    #[serde(default)]
    pub download_url: Option<String>,
    /// Inline result. Either a preformatted string or structured JSON.
    #[serde(default)]
    pub data: Option<Value>,
    /// Rejection reason. Kept as raw JSON so an unexpected type still
    /// yields a message instead of a parse failure.
    #[serde(default)]
    pub error: Option<Value>,
    /// Sent by the list conversions to flag `data` as an already formatted
    /// JSON string. Rendering does not depend on it, so any type is accepted.
    #[serde(default)]
    pub is_json_string: Option<Value>,
}

/// What the result area should show after a successful submission.
#[derive(Clone, Debug, PartialEq)]
pub enum ConversionOutcome {
    /// A download link to `url`, labeled with `file_name`.
    Download { url: String, file_name: String },
    /// Preformatted text; the only outcome that can be copied.
    Display { text: String },
    /// Success without a usable payload. The result area is shown empty.
    Empty,
}

impl ConversionOutcome {
    /// Text offered to the copy action, if any.
    pub fn copyable_text(&self) -> Option<&str> {
        match self {
            ConversionOutcome::Display { text } => Some(text),
            _ => None,
        }
    }
}

/// Why a submission did not produce an outcome.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionFailure {
    /// Non-success HTTP status with a parsable body.
    Rejected { status: u16, message: Option<String> },
    /// The request failed or the body could not be parsed.
    Transport(String),
}

impl SubmissionFailure {
    /// The text shown to the user in a blocking alert.
    pub fn alert_message(&self) -> String {
        match self {
            SubmissionFailure::Rejected { message, .. } => {
                format!("Error: {}", message.as_deref().unwrap_or(UNKNOWN_ERROR))
            }
            SubmissionFailure::Transport(_) => SUBMISSION_ERROR.to_string(),
        }
    }
}

impl fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionFailure::Rejected { status, message } => write!(
                f,
                "conversion rejected with status {}: {}",
                status,
                message.as_deref().unwrap_or("<no message>")
            ),
            SubmissionFailure::Transport(detail) => write!(f, "request failed: {}", detail),
        }
    }
}

impl std::error::Error for SubmissionFailure {}

impl ConversionResponse {
    /// Reads the success branch of the response.
    ///
    /// `download_url` wins over `data`. Empty strings, `null`, `false` and
    /// zero count as absent, matching how the page has always treated them.
    pub fn outcome(&self) -> ConversionOutcome {
        if let Some(url) = self.download_url.as_deref().filter(|u| !u.is_empty()) {
            return ConversionOutcome::Download {
                url: url.to_string(),
                file_name: download_file_name(url).to_string(),
            };
        }

        match &self.data {
            Some(data) if is_present(data) => ConversionOutcome::Display {
                text: display_text(data),
            },
            _ => ConversionOutcome::Empty,
        }
    }
}

/// Interprets a finished request.
///
/// `status` is the HTTP status code; `body` is the parsed JSON or the parse
/// error detail. A malformed body is a transport failure even when the
/// status was a success.
pub fn interpret_submission(
    status: u16,
    body: Result<ConversionResponse, String>,
) -> Result<ConversionOutcome, SubmissionFailure> {
    let response = body.map_err(SubmissionFailure::Transport)?;
    if is_success(status) {
        Ok(response.outcome())
    } else {
        Err(SubmissionFailure::Rejected {
            status,
            message: super::message_text(response.error),
        })
    }
}

/// Same range as the Fetch API `Response.ok`.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Final `/`-delimited segment of a download URL.
pub fn download_file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Visible label of a download link.
pub fn download_label(file_name: &str) -> String {
    format!("Download {}", file_name)
}

/// Renders an inline payload: strings verbatim, arrays and objects as
/// 2-space indented JSON, other scalars with their JSON text.
pub fn display_text(data: &Value) -> String {
    match data {
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
        }
        other => other.to_string(),
    }
}

fn is_present(data: &Value) -> bool {
    match data {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
