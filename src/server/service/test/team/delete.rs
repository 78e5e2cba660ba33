use super::*;

/// Tests deleting a team that never had a schedule.
///
/// Expected: team row and memberships removed
#[tokio::test]
async fn hard_deletes_unused_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;

    TeamService::new(db).delete(team.id).await?;

    let stored = entity::prelude::Team::find_by_id(team.id).one(db).await?;
    assert!(stored.is_none());
    let members = entity::prelude::TeamMember::find().all(db).await?;
    assert!(members.is_empty());

    Ok(())
}

/// Tests deleting a team that hosted a schedule.
///
/// Expected: row kept with is_deleted set, team no longer found through the service
#[tokio::test]
async fn soft_deletes_team_with_schedules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;

    let service = TeamService::new(db);
    service.delete(team.id).await?;

    let stored = entity::prelude::Team::find_by_id(team.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_deleted);
    assert!(entity::prelude::Schedule::find_by_id(schedule.id)
        .one(db)
        .await?
        .is_some());

    let result = service.get_by_id(team.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a team that was only invited to a schedule.
///
/// Expected: soft deleted as well
#[tokio::test]
async fn soft_deletes_invited_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _host, _, invited, _schedule) =
        factory::helpers::create_team_schedule_with_dependencies(
            db,
            entity::sea_orm_active_enums::ScheduleStatus::Pending,
        )
        .await?;

    TeamService::new(db).delete(invited.id).await?;

    let stored = entity::prelude::Team::find_by_id(invited.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_deleted);

    Ok(())
}

/// Tests deleting a team whose board has posts with comments.
///
/// Expected: team soft deleted, post and comment left in place
#[tokio::test]
async fn soft_deletes_team_with_board_posts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let post = factory::post::PostFactory::new(db, owner.id)
        .team_id(Some(team.id))
        .build()
        .await?;
    let comment = factory::comment::CommentFactory::new(db, post.id, owner.id)
        .build()
        .await?;

    TeamService::new(db).delete(team.id).await?;

    let stored = entity::prelude::Team::find_by_id(team.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_deleted);
    assert!(entity::prelude::Post::find_by_id(post.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
