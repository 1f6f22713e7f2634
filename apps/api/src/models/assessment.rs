use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only quiz assessment rows, one per submitted quiz.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub quiz_score: f64,
    /// JSONB array of graded questions (question, options, selectedAnswer,
    /// correctAnswer, explanation, isCorrect).
    pub questions: Value,
    /// Best-effort AI tip; null when generation failed or nothing was wrong.
    pub improvement_tip: Option<String>,
    pub created_at: DateTime<Utc>,
}
