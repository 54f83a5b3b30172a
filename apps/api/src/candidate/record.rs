use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the provider fallback bag.
pub const RAW_DATA_KEY: &str = "raw_data";

/// A loosely-typed candidate profile as delivered by any upstream provider.
///
/// The scorer only reads it. Ranking attaches results to a clone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateRecord(pub Value);

impl CandidateRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// True for `{}`, `null`, and any non-mapping value.
    pub fn is_empty(&self) -> bool {
        self.as_object().map_or(true, Map::is_empty)
    }

    /// Two-tier lookup: the top-level key when present and non-empty,
    /// otherwise the same key inside `raw_data`.
    pub fn resolve_field(&self, name: &str) -> Option<&Value> {
        let top = self.as_object()?;
        if let Some(value) = top.get(name).filter(|v| !is_blank(v)) {
            return Some(value);
        }
        top.get(RAW_DATA_KEY)?
            .as_object()?
            .get(name)
            .filter(|v| !is_blank(v))
    }

    /// Resolves a field and returns it as a trimmed, non-empty string.
    pub fn resolve_str(&self, name: &str) -> Option<&str> {
        self.resolve_field(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Resolves a field that is expected to be a sequence. Anything else is empty.
    pub fn resolve_list(&self, name: &str) -> &[Value] {
        self.resolve_field(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Top-level string field without fallback (`name`, `linkedin_url`, ...).
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.as_object()?
            .get(name)?
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl From<Value> for CandidateRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_detection() {
        assert!(CandidateRecord::new(json!({})).is_empty());
        assert!(CandidateRecord::new(Value::Null).is_empty());
        assert!(CandidateRecord::new(json!([1, 2])).is_empty());
        assert!(!CandidateRecord::new(json!({"name": "Ada"})).is_empty());
    }

    #[test]
    fn test_top_level_wins_over_raw_data() {
        let record = CandidateRecord::new(json!({
            "location": "Palo Alto",
            "raw_data": {"location": "Berlin"}
        }));
        assert_eq!(record.resolve_str("location"), Some("Palo Alto"));
    }

    #[test]
    fn test_empty_top_level_falls_back_to_raw_data() {
        let record = CandidateRecord::new(json!({
            "skills": [],
            "location": "",
            "raw_data": {"skills": ["Rust"], "location": "Berlin"}
        }));
        assert_eq!(record.resolve_list("skills").len(), 1);
        assert_eq!(record.resolve_str("location"), Some("Berlin"));
    }

    #[test]
    fn test_missing_everywhere_is_empty() {
        let record = CandidateRecord::new(json!({"raw_data": "not a map"}));
        assert!(record.resolve_field("education").is_none());
        assert!(record.resolve_list("education").is_empty());
    }

    #[test]
    fn test_wrong_shape_list_is_empty() {
        let record = CandidateRecord::new(json!({"experience": "ten years"}));
        assert!(record.resolve_list("experience").is_empty());
    }
}
