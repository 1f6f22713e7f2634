use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::insights::generate::generate_insights;
use crate::insights::handlers::upsert_insight;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub industry: Option<String>,
    pub experience_level: Option<String>,
    /// Comma-separated skill list from the onboarding form.
    pub skills: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub user: UserRow,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatusResponse {
    pub is_onboarded: bool,
}

/// POST /api/v1/profile
///
/// Upserts the caller's profile row. If an industry is set, regenerates the
/// insight row as a side effect — best-effort, so an AI or insight-write
/// failure never fails the onboarding itself.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>, AppError> {
    let skills: Option<Value> = req.skills.as_deref().map(split_skills);

    let user = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users
            (external_id, name, email, role, industry, experience_level, skills, image_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (external_id) DO UPDATE SET
            name = EXCLUDED.name,
            email = EXCLUDED.email,
            role = EXCLUDED.role,
            industry = EXCLUDED.industry,
            experience_level = EXCLUDED.experience_level,
            skills = EXCLUDED.skills,
            image_url = EXCLUDED.image_url,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(&auth.0)
    .bind(req.name.unwrap_or_default())
    .bind(req.email.unwrap_or_default())
    .bind(&req.role)
    .bind(&req.industry)
    .bind(&req.experience_level)
    .bind(&skills)
    .bind(&req.image_url)
    .fetch_one(&state.db)
    .await?;

    if let Some(industry) = &req.industry {
        let generated = generate_insights(state.llm.as_ref(), industry).await;
        if let Err(e) = upsert_insight(&state.db, user.id, industry, generated.into_value()).await {
            // Best-effort side path: the profile write already succeeded.
            warn!("Insight refresh during onboarding failed (ignored): {e}");
        }
    }

    Ok(Json(UpdateProfileResponse {
        success: true,
        user,
    }))
}

/// GET /api/v1/profile/status
///
/// Read-only: an unauthenticated or unknown caller is simply not onboarded.
pub async fn handle_onboarding_status(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
) -> Result<Json<OnboardingStatusResponse>, AppError> {
    let is_onboarded = match auth {
        Some(AuthUser(external_id)) => UserRow::find_by_external_id(&state.db, &external_id)
            .await?
            .and_then(|u| u.industry)
            .is_some(),
        None => false,
    };

    Ok(Json(OnboardingStatusResponse { is_onboarded }))
}

/// Splits the onboarding form's comma-separated skills into a JSON array,
/// dropping empty fragments. The stored shape is always an array going
/// forward; profile::skills still tolerates the older shapes on read.
fn split_skills(raw: &str) -> Value {
    Value::Array(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Value::String(s.to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_skills_trims_and_drops_empties() {
        assert_eq!(split_skills("Go, Rust,, ,SQL"), json!(["Go", "Rust", "SQL"]));
    }

    #[test]
    fn test_split_skills_empty_input() {
        assert_eq!(split_skills(""), json!([]));
    }
}
