//! Serving of stored media files.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{error::Error, model::app::AppState};

fn content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Serves a stored image by its media-root relative path
///
/// Paths that try to escape the media root answer 404.
pub async fn serve_media(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let bytes = state.media.read(&path).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type(&path))],
        bytes,
    )
        .into_response())
}
