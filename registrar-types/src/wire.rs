/// A JSON-compatible value as exchanged with the remote API.
pub type WireValue = serde_json::Value;

/// Names the shape of a wire value, for error messages.
#[must_use]
pub fn kind_of(value: &WireValue) -> &'static str {
    match value {
        WireValue::Null => "null",
        WireValue::Bool(_) => "bool",
        WireValue::Number(_) => "number",
        WireValue::String(_) => "string",
        WireValue::Array(_) => "array",
        WireValue::Object(_) => "object",
    }
}
