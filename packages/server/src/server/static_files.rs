use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Chat page, embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct Templates;

/// `GET /` - the chat page
pub async fn serve_home() -> Response {
    serve_embedded::<Templates>("home.html")
}

fn serve_embedded<E: RustEmbed>(path: &str) -> Response {
    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
