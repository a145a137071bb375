use serde_json::Value;

pub mod conversion;
pub mod headers;

/// Reduces a server `error` field to display text. Strings are kept as
/// they are, other values use their JSON text. Empty and `null` count as
/// no message.
pub(crate) fn message_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
