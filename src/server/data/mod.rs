//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from the business logic layer. Writes that
//! touch several rows run inside a single transaction owned by the repository method.

pub mod attendance;
pub mod comment;
pub mod feedback;
pub mod game_match;
pub mod goal;
pub mod photo;
pub mod post;
pub mod schedule;
pub mod team;
pub mod team_member;
pub mod user;

#[cfg(test)]
mod test;
