pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers::handle_contact;
use crate::resume::handlers::{handle_parse_resume, handle_upload_resume, method_not_allowed};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_home))
        .route("/resume", get(pages::handle_resume_page))
        .route("/theme/toggle", post(pages::handle_toggle_theme))
        // API
        .route("/api/contact", post(handle_contact))
        .route(
            "/api/parse-resume",
            post(handle_parse_resume).fallback(method_not_allowed),
        )
        .route(
            "/api/parse-resume/upload",
            post(handle_upload_resume).fallback(method_not_allowed),
        )
        .with_state(state)
}
