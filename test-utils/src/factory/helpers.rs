//! Shared helper utilities for factory methods.

use entity::sea_orm_active_enums::{MatchType, ScheduleStatus, TeamMemberRole};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{schedule::ScheduleFactory, team_member::TeamMemberFactory};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a team owned by that user, with the OWNER membership row.
///
/// # Returns
/// - `Ok((owner, team))` - The owning user and the created team
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::team::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::create_team(db, owner.id).await?;

    TeamMemberFactory::new(db, team.id, owner.id)
        .role(TeamMemberRole::Owner)
        .build()
        .await?;

    Ok((owner, team))
}

/// Creates a new user with an approved membership in `team_id`.
pub async fn create_team_player(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::user::Model, DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    crate::factory::team_member::create_member(db, team_id, user.id).await?;

    Ok(user)
}

/// Creates an owned team and a CONFIRMED squad schedule hosted by it.
///
/// # Returns
/// - `Ok((owner, team, schedule))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_squad_schedule_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::schedule::Model,
    ),
    DbErr,
> {
    let (owner, team) = create_team_with_owner(db).await?;
    let schedule = ScheduleFactory::new(db, team.id, owner.id).build().await?;

    Ok((owner, team, schedule))
}

/// Creates two owned teams and a TEAM schedule between them with the given status.
///
/// # Returns
/// - `Ok((host_owner, host, invited_owner, invited, schedule))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_schedule_with_dependencies(
    db: &DatabaseConnection,
    status: ScheduleStatus,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::user::Model,
        entity::team::Model,
        entity::schedule::Model,
    ),
    DbErr,
> {
    let (host_owner, host) = create_team_with_owner(db).await?;
    let (invited_owner, invited) = create_team_with_owner(db).await?;

    let schedule = ScheduleFactory::new(db, host.id, host_owner.id)
        .match_type(MatchType::Team)
        .invited_team_id(Some(invited.id))
        .status(status)
        .build()
        .await?;

    Ok((host_owner, host, invited_owner, invited, schedule))
}
