//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub posts: usize,
}

/// Health check endpoint - fails when the stored posts cannot be read.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .with_posts(|posts| Ok(posts.list_all()?.len()))
        .await?;

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        posts,
    }))
}
