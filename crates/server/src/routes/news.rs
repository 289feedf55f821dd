use actix_web::{get, post, web, HttpResponse};
use newsreel_llm::NoticeCollector;
use tracing::info;

use crate::render::PageView;
use crate::routes::html_page;
use crate::state::AppState;
use crate::types::{NewsQuery, ScriptForm};

/// Empty form
#[get("/")]
pub async fn index(state: web::Data<std::sync::Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    html_page(&state, &PageView::default())
}

/// Fetch news for a topic
#[get("/news")]
pub async fn news_page(
    query: web::Query<NewsQuery>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let topic = query.into_inner().topic;
    if topic.is_empty() {
        return html_page(&state, &PageView::default());
    }

    info!("News requested for topic: {:?}", topic);

    let reporter = NoticeCollector::new();
    let news = state.pipeline.summarize(&topic, &reporter).await;

    let mut view = PageView::for_topic(topic);
    view.errors(reporter.drain());
    match news {
        Some(news) => {
            view.success("News fetched successfully!");
            view.news = Some(news);
        }
        None => view.warning("No valid news found. Please try a different topic."),
    }

    html_page(&state, &view)
}

/// Optionally turn the fetched news into a video script
#[post("/script")]
pub async fn script_page(
    form: web::Form<ScriptForm>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let form = form.into_inner();
    let generate = form.wants_script();

    let mut view = PageView::for_topic(form.topic);
    view.generate_script = generate;

    if generate {
        let reporter = NoticeCollector::new();
        let script = state.pipeline.scriptify(Some(&form.news), &reporter).await;

        view.errors(reporter.drain());
        match script {
            Some(script) => {
                view.success("Video transcription ready!");
                view.script = Some(script);
            }
            None => view.warning("Could not generate transcription."),
        }
    }

    view.news = Some(form.news);
    html_page(&state, &view)
}
