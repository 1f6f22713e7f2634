//! Quiz generation and reply normalization.
//!
//! The quiz has no static fallback content — its documented degraded state is
//! an empty question list, which the UI presents as "try again later".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::interview::prompts::quiz_prompt;
use crate::llm_client::normalize::{parse_json, DegradeReason, Normalized};
use crate::llm_client::TextGenerator;

/// One multiple-choice question as requested from the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// Generates a quiz for an industry. Never fails: any upstream or parse
/// problem yields an empty question list with the reason attached.
pub async fn generate_quiz(llm: &dyn TextGenerator, industry: &str) -> Normalized<Vec<QuizQuestion>> {
    let prompt = quiz_prompt(industry);

    let raw = match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Quiz generation failed upstream: {e}");
            return Normalized::Degraded {
                value: vec![],
                reason: DegradeReason::Upstream(e.to_string()),
            };
        }
    };

    normalize_quiz(&raw)
}

/// Coerces a raw reply into a question list. Total — never raises.
///
/// The reply must contain a `questions` array; each element is decoded
/// independently and malformed elements are dropped rather than failing
/// their siblings.
pub fn normalize_quiz(raw: &str) -> Normalized<Vec<QuizQuestion>> {
    let parsed = match parse_json(raw) {
        Ok(v) => v,
        Err(reason) => {
            return Normalized::Degraded {
                value: vec![],
                reason,
            }
        }
    };

    match parsed.get("questions").and_then(Value::as_array) {
        Some(items) => Normalized::Parsed(
            items
                .iter()
                .filter_map(|q| serde_json::from_value(q.clone()).ok())
                .collect(),
        ),
        None => Normalized::Degraded {
            value: vec![],
            reason: DegradeReason::MissingQuestions,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_json(question: &str) -> String {
        format!(
            r#"{{"question": "{question}", "options": ["A", "B", "C", "D"],
                "correctAnswer": "A", "explanation": "because"}}"#
        )
    }

    #[test]
    fn test_valid_reply_parses() {
        let raw = format!(r#"{{"questions": [{}]}}"#, question_json("What is Rust?"));
        let result = normalize_quiz(&raw);
        assert!(!result.is_degraded());
        let questions = result.into_value();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "A");
    }

    #[test]
    fn test_missing_questions_array_is_empty_degraded() {
        let result = normalize_quiz(r#"{"quiz": []}"#);
        assert_eq!(
            result.degrade_reason(),
            Some(&DegradeReason::MissingQuestions)
        );
        assert!(result.value().is_empty());
    }

    #[test]
    fn test_prose_is_empty_degraded() {
        let result = normalize_quiz("Sure! Here are ten questions:");
        assert_eq!(result.degrade_reason(), Some(&DegradeReason::NonJson));
        assert!(result.value().is_empty());
    }

    #[test]
    fn test_malformed_element_dropped_siblings_kept() {
        let raw = format!(
            r#"{{"questions": [{}, {{"question": 42}}, {}]}}"#,
            question_json("Q1"),
            question_json("Q3")
        );
        let questions = normalize_quiz(&raw).into_value();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "Q1");
        assert_eq!(questions[1].question, "Q3");
    }

    #[test]
    fn test_fenced_reply_accepted() {
        let raw = format!(
            "```json\n{{\"questions\": [{}]}}\n```",
            question_json("Fenced?")
        );
        assert_eq!(normalize_quiz(&raw).into_value().len(), 1);
    }
}
