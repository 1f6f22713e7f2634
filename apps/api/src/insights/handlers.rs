use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::insights::generate::generate_insights;
use crate::insights::models::InsightRecord;
use crate::models::insight::IndustryInsightRow;
use crate::models::user::UserRow;
use crate::state::AppState;

/// How long a freshly written insight row stays current.
const INSIGHT_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub user: UserRow,
    pub insight: IndustryInsightRow,
}

/// GET /api/v1/insights
///
/// Always regenerates (AI or fallback) and overwrites the singleton row so
/// stale or previously degraded data is replaced. Generation failure never
/// surfaces — the fallback record is persisted instead.
pub async fn handle_get_insights(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<InsightsResponse>, AppError> {
    let user = UserRow::find_by_external_id(&state.db, &auth.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let industry = user.industry.clone().unwrap_or_else(|| "General".to_string());

    let generated = generate_insights(state.llm.as_ref(), &industry).await;
    if let Some(reason) = generated.degrade_reason() {
        warn!("Serving fallback insights for '{industry}': {reason}");
    }

    let insight = upsert_insight(&state.db, user.id, &industry, generated.into_value()).await?;

    Ok(Json(InsightsResponse { user, insight }))
}

/// Create-or-update the per-user insight row. Last write wins; two concurrent
/// regenerates racing on this row is acceptable by design.
pub async fn upsert_insight(
    pool: &sqlx::PgPool,
    user_id: Uuid,
    industry: &str,
    record: InsightRecord,
) -> Result<IndustryInsightRow, AppError> {
    let salary_ranges = serde_json::to_value(&record.salary_ranges)
        .map_err(|e| AppError::Internal(e.into()))?;
    let next_update = Utc::now() + Duration::days(INSIGHT_TTL_DAYS);

    let row = sqlx::query_as::<_, IndustryInsightRow>(
        r#"
        INSERT INTO industry_insights
            (user_id, industry, salary_ranges, growth_rate, demand_level,
             top_skills, market_outlook, key_trends, recommended_skills, next_update)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (user_id) DO UPDATE SET
            industry = EXCLUDED.industry,
            salary_ranges = EXCLUDED.salary_ranges,
            growth_rate = EXCLUDED.growth_rate,
            demand_level = EXCLUDED.demand_level,
            top_skills = EXCLUDED.top_skills,
            market_outlook = EXCLUDED.market_outlook,
            key_trends = EXCLUDED.key_trends,
            recommended_skills = EXCLUDED.recommended_skills,
            next_update = EXCLUDED.next_update,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(industry)
    .bind(salary_ranges)
    .bind(record.growth_rate)
    .bind(&record.demand_level)
    .bind(&record.top_skills)
    .bind(&record.market_outlook)
    .bind(&record.key_trends)
    .bind(&record.recommended_skills)
    .bind(next_update)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
