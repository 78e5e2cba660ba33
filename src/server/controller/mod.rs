//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into service params and map
//! domain models back into DTOs. Every handler carries a `#[utoipa::path]` annotation
//! for the generated API documentation.

use serde::Deserialize;

pub mod attendance;
pub mod auth;
pub mod feedback;
pub mod game;
pub mod photo;
pub mod post;
pub mod schedule;
pub mod team;
pub mod user;

/// Largest page size a client may request.
const MAX_ENTRIES: u64 = 100;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParams {
    /// Requested page size clamped to `1..=MAX_ENTRIES`.
    pub fn per_page(&self) -> u64 {
        clamp_entries(self.entries)
    }
}

pub(crate) fn clamp_entries(entries: u64) -> u64 {
    entries.clamp(1, MAX_ENTRIES)
}

pub(crate) fn default_entries() -> u64 {
    10
}
