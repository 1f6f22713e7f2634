use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::llm_client::normalize::clean_text;
use crate::models::insight::IndustryInsightRow;
use crate::models::resume::ResumeRow;
use crate::models::user::UserRow;
use crate::profile::skills::normalize_skills;
use crate::resume::prompts::{improve_prompt, ImprovePromptArgs};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    /// The text to improve.
    pub current: String,
    /// e.g. "professional summary", "experience bullet".
    #[serde(default, rename = "type")]
    pub section_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub improved: String,
}

/// PUT /api/v1/resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SaveResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    let user = UserRow::find_by_external_id(&state.db, &auth.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (user_id, content)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET
            content = EXCLUDED.content,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&req.content)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ResumeRow>, AppError> {
    let user = UserRow::find_by_external_id(&state.db, &auth.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE user_id = $1")
        .bind(user.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    Ok(Json(row))
}

/// POST /api/v1/resume/improve
///
/// No fallback content exists for rewriting a user's own words, so upstream
/// failure is surfaced rather than degraded.
pub async fn handle_improve(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, AppError> {
    let current = req.current.trim();
    if current.is_empty() {
        return Err(AppError::Validation(
            "Cannot improve empty content".to_string(),
        ));
    }
    let section_type = req.section_type.as_deref().unwrap_or("section");

    let user = UserRow::find_by_external_id(&state.db, &auth.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let industry = user.industry.as_deref().unwrap_or("your field");
    let experience_level = user.experience_level.as_deref().unwrap_or("Fresher");
    let skills = normalize_skills(user.skills.as_ref());

    let insight = sqlx::query_as::<_, IndustryInsightRow>(
        "SELECT * FROM industry_insights WHERE user_id = $1",
    )
    .bind(user.id)
    .fetch_optional(&state.db)
    .await?;
    let insight_context = insight_context_lines(insight.as_ref());

    let prompt = improve_prompt(&ImprovePromptArgs {
        section_type,
        industry,
        current_text: current,
        experience_level,
        skills: &skills,
        insight_context: &insight_context,
    });

    let raw = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume improvement failed: {e}")))?;

    let improved = clean_text(&raw)
        .ok_or_else(|| AppError::Llm("Model returned empty content".to_string()))?;

    Ok(Json(ImproveResponse { improved }))
}

/// Renders the optional market-context lines for the improvement prompt.
/// Empty string when no insight row exists yet.
fn insight_context_lines(insight: Option<&IndustryInsightRow>) -> String {
    let insight = match insight {
        Some(i) => i,
        None => return String::new(),
    };

    let mut lines = vec![format!("- Market demand level: {}", insight.demand_level)];
    if !insight.top_skills.is_empty() {
        lines.push(format!(
            "- In-demand skills in this industry: {}",
            insight.top_skills.join(", ")
        ));
    }
    lines.join("\n")
}
