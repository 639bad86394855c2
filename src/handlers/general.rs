use axum::{extract::State, http::header, response::IntoResponse};

use crate::templates::DeniedTemplate;

// Embed static assets at compile time
const STYLE_CSS: &str = include_str!("../../frontend/public/style.css");

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLE_CSS)
}

pub async fn access_denied(State(state): State<crate::SharedAppState>) -> DeniedTemplate {
    DeniedTemplate {
        page_title: "Access denied".to_string(),
        app_version: state.app_version.clone(),
        options: state.render_options,
    }
}
