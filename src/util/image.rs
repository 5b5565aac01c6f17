//! Base64 image decoding and media-root storage.
//!
//! Clients submit images as `data:image/...;base64,...` URIs inside JSON
//! payloads. Decoded bytes are stored verbatim under the media root and
//! referenced by a media-root relative path; `/media/{path}` serves them
//! back. No image processing happens here.

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::Rng;

use crate::error::image::ImageError;

/// Image formats accepted in data URIs.
static ALLOWED_FORMATS: &[&str] = &["png", "jpeg", "jpg", "gif", "webp"];

/// Storage for uploaded images under a single media root directory.
#[derive(Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Opens a store rooted at `root`, creating the directory when missing.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;

        Ok(Self { root })
    }

    /// Decodes a base64 data URI and stores the bytes under
    /// `{category}/{random}.{ext}`, returning the media-root relative path.
    pub async fn save_data_uri(
        &self,
        category: &str,
        data_uri: &str,
    ) -> Result<String, ImageError> {
        let (extension, bytes) = decode_data_uri(data_uri)?;

        let file_name = format!("{:032x}.{}", rand::rng().random::<u128>(), extension);
        let relative = format!("{}/{}", category, file_name);

        let path = self.root.join(category);
        tokio::fs::create_dir_all(&path).await?;
        tokio::fs::write(path.join(&file_name), &bytes).await?;

        Ok(relative)
    }

    /// Reads a stored file by its media-root relative path.
    pub async fn read(&self, relative: &str) -> Result<Vec<u8>, ImageError> {
        let bytes = tokio::fs::read(self.resolve(relative)?).await?;

        Ok(bytes)
    }

    /// Removes a stored file; missing files are not an error so removal is
    /// idempotent.
    pub async fn remove(&self, relative: &str) -> Result<(), ImageError> {
        match tokio::fs::remove_file(self.resolve(relative)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The public URL a stored relative path is served under.
    pub fn url(relative: &str) -> String {
        format!("/media/{}", relative)
    }

    fn resolve(&self, relative: &str) -> Result<PathBuf, ImageError> {
        let escapes_root = relative
            .split('/')
            .any(|part| part.is_empty() || part == "." || part == "..");
        if relative.is_empty() || escapes_root {
            return Err(ImageError::InvalidPath(relative.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

/// Splits a `data:image/<subtype>;base64,<payload>` URI into a file
/// extension and the decoded bytes.
fn decode_data_uri(data_uri: &str) -> Result<(String, Vec<u8>), ImageError> {
    let rest = data_uri
        .strip_prefix("data:")
        .ok_or(ImageError::InvalidDataUri)?;
    let (content_type, payload) = rest.split_once(";base64,").ok_or(ImageError::InvalidDataUri)?;

    let subtype = content_type
        .strip_prefix("image/")
        .ok_or_else(|| ImageError::UnsupportedFormat(content_type.to_string()))?;
    if !ALLOWED_FORMATS.contains(&subtype) {
        return Err(ImageError::UnsupportedFormat(content_type.to_string()));
    }

    let extension = if subtype == "jpeg" { "jpg" } else { subtype };
    let bytes = BASE64
        .decode(payload)
        .map_err(|_| ImageError::InvalidDataUri)?;

    Ok((extension.to_string(), bytes))
}
