use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::interview::prompts::improvement_tip_prompt;
use crate::interview::quiz::{generate_quiz, QuizQuestion};
use crate::interview::scoring::{score_quiz, GradedQuestion};
use crate::llm_client::normalize::clean_text;
use crate::models::assessment::AssessmentRow;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    /// Overrides the caller's stored industry when set.
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub questions: Vec<QuizQuestion>,
    pub answers: Vec<String>,
}

/// POST /api/v1/interview/quiz
///
/// An empty list is the degraded state, never an error — the client prompts
/// the user to retry later.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<GenerateQuizRequest>,
) -> Result<Json<GenerateQuizResponse>, AppError> {
    let user = UserRow::find_by_external_id(&state.db, &auth.0).await?;

    let industry = req
        .industry
        .or_else(|| user.and_then(|u| u.industry))
        .unwrap_or_else(|| "technology".to_string());

    let generated = generate_quiz(state.llm.as_ref(), &industry).await;
    if let Some(reason) = generated.degrade_reason() {
        warn!("Quiz generation degraded for '{industry}': {reason}");
    }

    Ok(Json(GenerateQuizResponse {
        questions: generated.into_value(),
    }))
}

/// POST /api/v1/interview/assessments
///
/// Grades the submission server-side, attaches a best-effort improvement tip
/// for the wrong answers, and appends the assessment row. Only the tip path
/// is allowed to fail silently; the insert itself surfaces errors.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<Json<AssessmentRow>, AppError> {
    let user = UserRow::find_by_external_id(&state.db, &auth.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let score = score_quiz(&req.questions, &req.answers);
    let improvement_tip = generate_improvement_tip(&state, &score.graded).await;

    let category = user.industry.clone().unwrap_or_else(|| "General".to_string());
    let questions = serde_json::to_value(&score.graded)
        .map_err(|e| AppError::Internal(e.into()))?;

    let row = sqlx::query_as::<_, AssessmentRow>(
        r#"
        INSERT INTO assessments (user_id, category, quiz_score, questions, improvement_tip)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&category)
    .bind(score.percent_correct)
    .bind(questions)
    .bind(&improvement_tip)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/v1/interview/assessments
///
/// Read-only listing: no identity or no user row degrades to an empty list.
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
) -> Result<Json<Vec<AssessmentRow>>, AppError> {
    let external_id = match auth {
        Some(AuthUser(id)) => id,
        None => return Ok(Json(vec![])),
    };

    let user = match UserRow::find_by_external_id(&state.db, &external_id).await? {
        Some(u) => u,
        None => return Ok(Json(vec![])),
    };

    let rows = sqlx::query_as::<_, AssessmentRow>(
        "SELECT * FROM assessments WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// Best-effort: a tip is nice to have, its failure must not affect the
/// assessment insert.
async fn generate_improvement_tip(state: &AppState, graded: &[GradedQuestion]) -> Option<String> {
    let mistakes: Vec<String> = graded
        .iter()
        .filter(|g| !g.is_correct)
        .map(|g| format!("Q: {}", g.question))
        .collect();

    if mistakes.is_empty() {
        return None;
    }

    let prompt = improvement_tip_prompt(&mistakes.join("\n"));
    match state.llm.generate(&prompt).await {
        Ok(raw) => clean_text(&raw),
        Err(e) => {
            warn!("Improvement tip generation failed (ignored): {e}");
            None
        }
    }
}
