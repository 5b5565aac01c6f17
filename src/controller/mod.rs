//! HTTP controllers.
//!
//! Controllers translate between HTTP and the service layer: they resolve
//! the session to a viewer, deserialize payloads, call services and map
//! outcomes to status codes. No business rules live here.

pub mod auth;
pub mod ingredient;
pub mod media;
pub mod recipe;
pub mod user;
pub mod util;
