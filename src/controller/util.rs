//! Session helpers shared by controllers.

use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::session::SessionUserId,
};

/// Resolves the session to a viewer id, or None for anonymous callers
pub async fn current_user_id(session: &Session) -> Result<Option<i32>, Error> {
    SessionUserId::get(session).await
}

/// Resolves the session to a user id, failing for anonymous callers
pub async fn require_user_id(session: &Session) -> Result<i32, Error> {
    let user_id = SessionUserId::get(session)
        .await?
        .ok_or(AuthError::NotAuthenticated)?;

    Ok(user_id)
}
