use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::cover_letter::prompts::{cover_letter_prompt, CoverLetterPromptArgs};
use crate::errors::AppError;
use crate::llm_client::normalize::clean_text;
use crate::models::cover_letter::CoverLetterRow;
use crate::models::user::UserRow;
use crate::profile::skills::normalize_skills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateCoverLetterRequest {
    pub job_title: String,
    pub company_name: String,
    #[serde(default)]
    pub job_description: String,
}

/// POST /api/v1/cover-letters
///
/// There is no fallback letter: an upstream failure IS surfaced, since saving
/// nothing beats saving an empty letter.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<GenerateCoverLetterRequest>,
) -> Result<Json<CoverLetterRow>, AppError> {
    if req.job_title.trim().is_empty() || req.company_name.trim().is_empty() {
        return Err(AppError::Validation(
            "job_title and company_name are required".to_string(),
        ));
    }

    let user = UserRow::find_by_external_id(&state.db, &auth.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    // Profile fields may be unset mid-onboarding; the prompt gets stable
    // stand-ins rather than empty strings.
    let name = non_empty_or(&user.name, "Candidate");
    let email = non_empty_or(&user.email, "email@example.com");
    let industry = user.industry.as_deref().unwrap_or("N/A");
    let experience_level = user.experience_level.as_deref().unwrap_or("Fresher");
    let skills = normalize_skills(user.skills.as_ref());
    let today = Utc::now().format("%B %-d, %Y").to_string();

    let prompt = cover_letter_prompt(&CoverLetterPromptArgs {
        job_title: &req.job_title,
        company_name: &req.company_name,
        name,
        email,
        today: &today,
        industry,
        experience_level,
        skills: &skills,
        job_description: &req.job_description,
    });

    let raw = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))?;

    let content = clean_text(&raw)
        .ok_or_else(|| AppError::Llm("Model returned empty cover letter".to_string()))?;

    let row = sqlx::query_as::<_, CoverLetterRow>(
        r#"
        INSERT INTO cover_letters
            (user_id, job_title, company_name, job_description, content, status)
        VALUES ($1, $2, $3, $4, $5, 'completed')
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&req.job_title)
    .bind(&req.company_name)
    .bind(&req.job_description)
    .bind(&content)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/v1/cover-letters
///
/// Read-only listing: no identity or no user row degrades to an empty list.
pub async fn handle_list_cover_letters(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
) -> Result<Json<Vec<CoverLetterRow>>, AppError> {
    let external_id = match auth {
        Some(AuthUser(id)) => id,
        None => return Ok(Json(vec![])),
    };

    let user = match UserRow::find_by_external_id(&state.db, &external_id).await? {
        Some(u) => u,
        None => return Ok(Json(vec![])),
    };

    let rows = sqlx::query_as::<_, CoverLetterRow>(
        "SELECT * FROM cover_letters WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// GET /api/v1/cover-letters/:id
pub async fn handle_get_cover_letter(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<CoverLetterRow>, AppError> {
    let user = UserRow::find_by_external_id(&state.db, &auth.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let row = sqlx::query_as::<_, CoverLetterRow>(
        "SELECT * FROM cover_letters WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user.id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Cover letter {id} not found")))?;

    Ok(Json(row))
}

/// DELETE /api/v1/cover-letters/:id
pub async fn handle_delete_cover_letter(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let user = UserRow::find_by_external_id(&state.db, &auth.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let result = sqlx::query("DELETE FROM cover_letters WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user.id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Cover letter {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}
