use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// One row per authenticated identity. `external_id` is the opaque id issued
/// by the auth provider; everything else comes from onboarding.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub industry: Option<String>,
    pub experience_level: Option<String>,
    /// Historically polymorphic JSONB: array of strings, bare string, keyed
    /// object, or null. Never read directly — goes through profile::skills.
    pub skills: Option<Value>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Looks up a user by the auth provider's opaque id.
    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE external_id = $1")
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }
}
