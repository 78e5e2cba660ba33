use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to SQLite, creating tables or preparing the session store failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Writing to the test session failed.
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}
