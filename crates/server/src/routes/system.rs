use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// Liveness check with the configured models
#[get("/health")]
pub async fn health(state: web::Data<std::sync::Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        news_model: state.pipeline.news_model().to_string(),
        script_model: state.pipeline.script_model().to_string(),
    }))
}
