//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Status rules that do not need the
//! database live next to the model they govern.

pub mod attendance;
pub mod feedback;
pub mod game;
pub mod photo;
pub mod post;
pub mod schedule;
pub mod team;
pub mod user;
