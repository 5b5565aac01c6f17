//! Test context for Phase 2 test execution.
//!
//! The context bundles an in-memory SQLite database, a session backed by an
//! in-memory store, and a per-test media root directory for image uploads.

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

static MEDIA_ROOT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Test environment handed to every test.
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder)
/// rather than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_core_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// let user = test.user().insert_user(1).await?;
/// let recipe = test.recipe().insert_recipe(user.id, 1).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,
    /// Per-test directory for uploaded images
    pub media_root: PathBuf,
}

impl TestContext {
    /// Convert the database handle and media root into any type that can be
    /// constructed from them.
    ///
    /// This allows conversion to AppState without creating a circular
    /// dependency between the test-utils crate and the main larder crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // In integration tests
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.db.clone(), self.media_root.clone()))
    }

    /// Create a new test context.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await.unwrap();

        let media_root = std::env::temp_dir().join(format!(
            "larder-test-{}-{}",
            std::process::id(),
            MEDIA_ROOT_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&media_root)?;

        Ok(TestContext {
            db,
            session,
            media_root,
        })
    }

    /// Create database tables from schema statements.
    ///
    /// Executes CREATE TABLE statements for all provided table schemas. Used
    /// internally by TestBuilder during test initialization.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
