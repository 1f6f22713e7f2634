//! Skills field normalization.
//!
//! The `users.skills` JSONB column has carried several shapes over the app's
//! life: an array of strings, a bare comma-joined string, a keyed object, or
//! null. Prompt builders need a single display string, so the shapes form a
//! closed union with one conversion per tag and a total default arm.

use serde_json::Value;

/// Fallback display string for absent or unrecognized skills data.
pub const SKILLS_FALLBACK: &str = "N/A";

/// The closed set of shapes the stored skills value can take.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillsValue {
    Absent,
    Single(String),
    List(Vec<Value>),
    Keyed(serde_json::Map<String, Value>),
    Other,
}

impl SkillsValue {
    pub fn classify(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => SkillsValue::Absent,
            Some(Value::String(s)) => SkillsValue::Single(s.clone()),
            Some(Value::Array(items)) => SkillsValue::List(items.clone()),
            Some(Value::Object(map)) => SkillsValue::Keyed(map.clone()),
            Some(_) => SkillsValue::Other,
        }
    }

    /// Total projection to a display string. A keyed mapping joins its values
    /// in the map's iteration order.
    pub fn display_string(&self) -> String {
        match self {
            SkillsValue::Absent | SkillsValue::Other => SKILLS_FALLBACK.to_string(),
            SkillsValue::Single(s) => s.clone(),
            SkillsValue::List(items) => join_values(items.iter()),
            SkillsValue::Keyed(map) => join_values(map.values()),
        }
    }
}

/// Reduces the stored skills value to a single comma-joined display string.
pub fn normalize_skills(value: Option<&Value>) -> String {
    SkillsValue::classify(value).display_string()
}

fn join_values<'a>(items: impl Iterator<Item = &'a Value>) -> String {
    items
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_is_na() {
        assert_eq!(normalize_skills(None), "N/A");
        assert_eq!(normalize_skills(Some(&Value::Null)), "N/A");
    }

    #[test]
    fn test_array_joined() {
        let v = json!(["Go", "Rust"]);
        assert_eq!(normalize_skills(Some(&v)), "Go, Rust");
    }

    #[test]
    fn test_string_passes_through() {
        let v = json!("Go, Rust");
        assert_eq!(normalize_skills(Some(&v)), "Go, Rust");
    }

    #[test]
    fn test_keyed_mapping_joins_values() {
        let v = json!({"a": "Go", "b": "Rust"});
        assert_eq!(normalize_skills(Some(&v)), "Go, Rust");
    }

    #[test]
    fn test_unrecognized_shape_is_na() {
        let v = json!(42);
        assert_eq!(normalize_skills(Some(&v)), "N/A");
        let v = json!(true);
        assert_eq!(normalize_skills(Some(&v)), "N/A");
    }

    #[test]
    fn test_non_string_elements_stringified() {
        let v = json!(["Go", 3]);
        assert_eq!(normalize_skills(Some(&v)), "Go, 3");
    }

    #[test]
    fn test_classify_tags() {
        assert_eq!(SkillsValue::classify(None), SkillsValue::Absent);
        assert!(matches!(
            SkillsValue::classify(Some(&json!("x"))),
            SkillsValue::Single(_)
        ));
        assert!(matches!(
            SkillsValue::classify(Some(&json!([]))),
            SkillsValue::List(_)
        ));
        assert!(matches!(
            SkillsValue::classify(Some(&json!({}))),
            SkillsValue::Keyed(_)
        ));
        assert_eq!(SkillsValue::classify(Some(&json!(1.5))), SkillsValue::Other);
    }
}
