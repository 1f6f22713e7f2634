pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::cover_letter::handlers as cover_letter;
use crate::insights::handlers as insights;
use crate::interview::handlers as interview;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile / onboarding
        .route("/api/v1/profile", post(profile::handle_update_profile))
        .route(
            "/api/v1/profile/status",
            get(profile::handle_onboarding_status),
        )
        // Industry insights
        .route("/api/v1/insights", get(insights::handle_get_insights))
        // Mock interview
        .route(
            "/api/v1/interview/quiz",
            post(interview::handle_generate_quiz),
        )
        .route(
            "/api/v1/interview/assessments",
            post(interview::handle_submit_assessment).get(interview::handle_list_assessments),
        )
        // Cover letters
        .route(
            "/api/v1/cover-letters",
            post(cover_letter::handle_generate_cover_letter)
                .get(cover_letter::handle_list_cover_letters),
        )
        .route(
            "/api/v1/cover-letters/:id",
            get(cover_letter::handle_get_cover_letter)
                .delete(cover_letter::handle_delete_cover_letter),
        )
        // Resume
        .route(
            "/api/v1/resume",
            put(resume::handle_save_resume).get(resume::handle_get_resume),
        )
        .route("/api/v1/resume/improve", post(resume::handle_improve))
        .with_state(state)
}
