//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the domain
//! rules (status transitions, ownership checks that need loaded rows, input validation),
//! coordinate several repositories where one operation spans them, and return `AppError`
//! so controllers can hand results straight to Axum.
//!
//! Role checks that only need the session user and a team ID happen earlier, in the
//! controllers through `AuthGuard`.

pub mod admin;
pub mod attendance;
pub mod auth;
pub mod comment;
pub mod feedback;
pub mod game;
pub mod mvp;
pub mod photo;
pub mod post;
pub mod schedule;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
