use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only cover letter rows, one per generation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CoverLetterRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    /// Generated markdown letter.
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
