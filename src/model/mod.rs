//! Request and response DTOs exchanged with the web client.
//!
//! These types define the JSON wire format only. Server-side domain models live in
//! `server::model` and convert into these at the controller boundary.

pub mod api;
pub mod attendance;
pub mod feedback;
pub mod game;
pub mod photo;
pub mod post;
pub mod schedule;
pub mod team;
pub mod user;
