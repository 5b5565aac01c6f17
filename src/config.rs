//! Environment-driven server configuration.

/// Runtime configuration read from the environment.
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// Directory uploaded images are stored under.
    pub media_root: String,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `DATABASE_URL` is required; `BIND_ADDR` and `MEDIA_ROOT` fall back to
    /// defaults suitable for local development.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            media_root: std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string()),
        })
    }
}
