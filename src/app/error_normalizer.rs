//! Turns backend failures into one display string.
//!
//! Backends built on FastAPI-style validation reject with a JSON body such as
//! `{"detail":[{"loc":["body","name"],"msg":"too short"}]}`. Those are rendered
//! as `Field 'name': too short`; anything else is shown verbatim.

use serde_json::Value;

use crate::ports::RepositoryError;

/// Used when neither the error nor the caller provides any text.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

pub fn normalize_error(error: &RepositoryError, fallback: &str) -> String {
    normalize(error.message(), fallback)
}

/// Never returns an empty string.
pub fn normalize(message: &str, fallback: &str) -> String {
    if message.trim().is_empty() {
        return if fallback.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            fallback.to_string()
        };
    }

    decode_detail(message).unwrap_or_else(|| message.to_string())
}

fn decode_detail(message: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(message).ok()?;
    let detail = payload.as_object()?.get("detail")?;

    let rendered = match detail {
        Value::Array(entries) => render_field_errors(entries)?,
        Value::String(text) if !text.is_empty() => text.clone(),
        Value::Null | Value::Bool(false) | Value::String(_) => return None,
        Value::Number(n) if n.as_f64() == Some(0.0) => return None,
        other => other.to_string(),
    };

    (!rendered.is_empty()).then_some(rendered)
}

/// All-or-nothing: one malformed entry discards the structured rendering.
fn render_field_errors(entries: &[Value]) -> Option<String> {
    let rendered: Option<Vec<String>> = entries.iter().map(render_field_error).collect();
    Some(rendered?.join("; "))
}

fn render_field_error(entry: &Value) -> Option<String> {
    let loc = entry.get("loc")?.as_array()?;
    let msg = entry.get("msg")?.as_str()?;

    // loc[0] is the request part ("body", "query", ...)
    let path: Option<Vec<String>> = loc.iter().skip(1).map(path_segment).collect();

    Some(format!("Field '{}': {}", path?.join("."), msg))
}

fn path_segment(segment: &Value) -> Option<String> {
    match segment {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
