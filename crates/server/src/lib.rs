//! Newsreel HTTP Server
//!
//! Actix-web form application for news summaries and video scripts

mod render;
mod routes;
mod state;
mod types;

use actix_web::{web, App, HttpServer};
use newsreel_common::{AppConfig, Result};
use newsreel_llm::NewsPipeline;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use render::{Notice, NoticeKind, PageView, Pages};
pub use routes::configure;
pub use routes::download::SCRIPT_FILENAME;
pub use state::AppState;
pub use types::{DownloadForm, HealthResponse, NewsQuery, ScriptForm};

/// Start the web form server and run until shutdown
pub async fn start_server(config: AppConfig, pipeline: NewsPipeline) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = web::Data::new(Arc::new(AppState::new(pipeline)?));

    info!("Starting web server on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Web server stopped");
    Ok(())
}
