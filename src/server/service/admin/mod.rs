//! Admin bootstrap.
//!
//! The first admin is created through a one-time code printed at startup, see
//! `code::AdminCodeService`.

pub mod code;
