//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` shorthand that
//! inserts a row with defaults. Factories never create their parents implicitly; use
//! `helpers` when a test needs a whole hierarchy.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let team = factory::team::TeamFactory::new(&db, user.id).name("FC Seoul").build().await?;
//!
//! let (owner, team) = factory::helpers::create_team_with_owner(&db).await?;
//! ```

pub mod attendance;
pub mod comment;
pub mod game_match;
pub mod helpers;
pub mod post;
pub mod schedule;
pub mod team;
pub mod team_member;
pub mod user;

pub use attendance::create_attendance;
pub use comment::create_comment;
pub use game_match::{create_lineup, create_match};
pub use post::create_post;
pub use schedule::create_schedule;
pub use team::create_team;
pub use team_member::create_member;
pub use user::create_user;
