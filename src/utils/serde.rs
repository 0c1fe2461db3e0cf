use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field the backend may encode either as a JSON number or as
/// a string, into its text form. Absent and null values become the empty
/// string.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected a number or a string, got {}",
            other
        ))),
    }
}
