//! Uploaded image decoding and media storage errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while decoding base64 image payloads or touching the media
/// root.
#[derive(Error, Debug)]
pub enum ImageError {
    /// Payload was not a `data:image/...;base64,...` URI or failed to decode.
    #[error("Image must be a base64-encoded data URI")]
    InvalidDataUri,
    /// Data URI declared a non-image or unrecognized content type.
    #[error("Unsupported image content type {0:?}")]
    UnsupportedFormat(String),
    /// Requested media path escapes the media root.
    #[error("Invalid media path {0:?}")]
    InvalidPath(String),
    /// Filesystem error while reading or writing media.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidDataUri | Self::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            Self::InvalidPath(_) => StatusCode::NOT_FOUND,
            Self::Io(err) if err.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
            Self::Io(err) => {
                tracing::error!("{}", err);

                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
