//! Futsal Hub Test Utils
//!
//! Shared testing utilities for the futsal hub backend. Tests build an in-memory SQLite
//! database containing only the tables they need, then seed it with factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_schedule() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
