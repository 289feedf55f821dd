use actix_web::{web, HttpResponse};

use crate::render::PageView;
use crate::state::AppState;

pub mod download;
pub mod news;
pub mod system;

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(news::index)
        .service(news::news_page)
        .service(news::script_page)
        .service(download::download)
        .service(system::health);
}

/// Render a page view as an HTML response
pub(crate) fn html_page(state: &AppState, view: &PageView) -> actix_web::Result<HttpResponse> {
    let html = state
        .pages
        .render(view)
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
