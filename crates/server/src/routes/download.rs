use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{post, web, HttpResponse};
use tracing::info;

use crate::types::DownloadForm;

/// Fixed name of the downloaded script file
pub const SCRIPT_FILENAME: &str = "video_script.txt";

#[post("/download")]
pub async fn download(form: web::Form<DownloadForm>) -> actix_web::Result<HttpResponse> {
    let script = form.into_inner().script;
    info!("Serving script download ({} bytes)", script.len());

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(SCRIPT_FILENAME.to_string())],
        })
        .body(script))
}
