use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with only the tables a test needs.
///
/// Tables are created in the order they are added, so parents must come before the
/// tables that reference them. The `with_*_tables` helpers already respect that order
/// and each one includes everything the previous tier needs.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// The CREATE TABLE statement is generated from the SeaORM entity with the SQLite
    /// backend, including the foreign keys declared on its relations.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds `user`, `team` and `team_member`.
    pub fn with_team_tables(self) -> Self {
        self.with_table(User).with_table(Team).with_table(TeamMember)
    }

    /// Adds the team tables plus `schedule` and `schedule_attendance`.
    pub fn with_schedule_tables(self) -> Self {
        self.with_team_tables()
            .with_table(Schedule)
            .with_table(ScheduleAttendance)
    }

    /// Adds the schedule tables plus `game_match`, `lineup` and `goal_record`.
    ///
    /// Use this for match, goal and statistics tests.
    pub fn with_match_tables(self) -> Self {
        self.with_schedule_tables()
            .with_table(GameMatch)
            .with_table(Lineup)
            .with_table(GoalRecord)
    }

    /// Adds the team tables plus `post` and `comment`.
    pub fn with_board_tables(self) -> Self {
        self.with_team_tables().with_table(Post).with_table(Comment)
    }

    /// Adds the schedule tables plus `photo`.
    pub fn with_photo_tables(self) -> Self {
        self.with_schedule_tables().with_table(Photo)
    }

    /// Adds `user`, `feedback` and `bug_report`.
    pub fn with_feedback_tables(self) -> Self {
        self.with_table(User)
            .with_table(Feedback)
            .with_table(BugReport)
    }

    /// Adds every application table once.
    ///
    /// Use this when an operation has to look across teams, schedules, boards and photos.
    pub fn with_all_tables(self) -> Self {
        self.with_match_tables()
            .with_table(Post)
            .with_table(Comment)
            .with_table(Photo)
            .with_table(Feedback)
            .with_table(BugReport)
    }

    /// Creates the in-memory database and executes all configured CREATE TABLE statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
