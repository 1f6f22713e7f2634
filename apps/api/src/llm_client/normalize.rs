//! Reply normalization — coerces untrusted generative-text output into values
//! that are always safe to persist and render.
//!
//! The upstream model may emit explanatory prose, Markdown fencing, partially
//! formed JSON, or a shape that drifts from the requested schema. Nothing in
//! this module ever panics or propagates a parse error: schema-bound callers
//! degrade to a caller-supplied fallback, schema-less callers get the cleaned
//! prose back.

use serde_json::Value;
use thiserror::Error;

/// Why a generation call produced a degraded result instead of a parsed one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DegradeReason {
    #[error("model returned an empty reply")]
    EmptyReply,

    #[error("model returned non-JSON prose")]
    NonJson,

    #[error("model returned malformed JSON: {0}")]
    ParseError(String),

    #[error("quiz reply missing 'questions' array")]
    MissingQuestions,

    #[error("upstream generation failed: {0}")]
    Upstream(String),
}

/// Outcome of a best-effort generation: either a reply that parsed against the
/// schema, or the typed fallback with the reason it was substituted.
///
/// The value is usable either way; `reason` exists so call sites can log the
/// degradation without it affecting control flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized<T> {
    Parsed(T),
    Degraded { value: T, reason: DegradeReason },
}

impl<T> Normalized<T> {
    pub fn value(&self) -> &T {
        match self {
            Normalized::Parsed(v) => v,
            Normalized::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Normalized::Parsed(v) => v,
            Normalized::Degraded { value, .. } => value,
        }
    }

    pub fn degrade_reason(&self) -> Option<&DegradeReason> {
        match self {
            Normalized::Parsed(_) => None,
            Normalized::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Normalized::Degraded { .. })
    }
}

/// Removes every literal ```json / ``` fence from the reply and trims.
/// The model is told not to fence its output but does so anyway often enough
/// that fenced and unfenced replies must normalize identically.
pub fn strip_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Cleans a schema-less reply (cover letter, improved resume text).
/// Returns `None` when nothing usable remains.
pub fn clean_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = strip_fences(trimmed);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Parses a schema-bound reply into a JSON value.
///
/// Text that does not start with `{` or `[` after fence stripping is treated
/// as prose and rejected without a parse attempt, matching the render-safe
/// contract: schema-bound callers substitute their fallback on any `Err`.
pub fn parse_json(raw: &str) -> Result<Value, DegradeReason> {
    let cleaned = match clean_text(raw) {
        Some(c) => c,
        None => return Err(DegradeReason::EmptyReply),
    };

    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        return Err(DegradeReason::NonJson);
    }

    serde_json::from_str(&cleaned).map_err(|e| DegradeReason::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let fenced = "```json\n{\"growthRate\": 12}\n```";
        let bare = "{\"growthRate\": 12}";
        assert_eq!(parse_json(fenced).unwrap(), parse_json(bare).unwrap());
    }

    #[test]
    fn test_parse_json_empty_reply() {
        assert_eq!(parse_json(""), Err(DegradeReason::EmptyReply));
        assert_eq!(parse_json("   \n  "), Err(DegradeReason::EmptyReply));
        // A reply that is nothing but fences is also empty
        assert_eq!(parse_json("```json\n```"), Err(DegradeReason::EmptyReply));
    }

    #[test]
    fn test_parse_json_prose_rejected() {
        let prose = "I'm sorry, I can't produce JSON for that industry.";
        assert_eq!(parse_json(prose), Err(DegradeReason::NonJson));
    }

    #[test]
    fn test_parse_json_malformed() {
        assert!(matches!(
            parse_json("{bad json"),
            Err(DegradeReason::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_json_array_root_accepted() {
        assert_eq!(parse_json("[1, 2]").unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_clean_text_passes_prose_through() {
        assert_eq!(
            clean_text("  Dear Hiring Manager,\n...  ").as_deref(),
            Some("Dear Hiring Manager,\n...")
        );
        assert_eq!(clean_text("   "), None);
    }

    #[test]
    fn test_normalized_accessors() {
        let parsed: Normalized<i32> = Normalized::Parsed(1);
        assert!(!parsed.is_degraded());
        assert_eq!(*parsed.value(), 1);
        assert_eq!(parsed.degrade_reason(), None);

        let degraded = Normalized::Degraded {
            value: 2,
            reason: DegradeReason::NonJson,
        };
        assert!(degraded.is_degraded());
        assert_eq!(degraded.degrade_reason(), Some(&DegradeReason::NonJson));
        assert_eq!(degraded.into_value(), 2);
    }
}
