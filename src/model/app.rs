//! Shared application state handed to every handler.

use sea_orm::DatabaseConnection;

use crate::util::image::MediaStore;

/// Application state: the database handle and the media storage root.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,
    /// Storage for uploaded recipe and avatar images.
    pub media: MediaStore,
}

/// Assembles state from a database handle and a media root path.
///
/// Used by tests to build an `AppState` without depending on this crate
/// from the test-utils crate.
impl From<(DatabaseConnection, std::path::PathBuf)> for AppState {
    fn from((db, media_root): (DatabaseConnection, std::path::PathBuf)) -> Self {
        let media = MediaStore::new(media_root).expect("Failed to open media root");

        Self { db, media }
    }
}
