use super::*;

/// Tests listing photos by schedule and by team.
///
/// Expected: Ok with each photo only in the listing it was attached to
#[tokio::test]
async fn lists_by_schedule_and_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_photo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;

    let repo = PhotoRepository::new(db);
    let schedule_photo = repo.create(photo(owner.id, Some(schedule.id), None)).await?;
    let team_photo = repo.create(photo(owner.id, None, Some(team.id))).await?;

    let by_schedule = repo.get_by_schedule(schedule.id).await?;
    let by_team = repo.get_by_team(team.id).await?;

    assert_eq!(by_schedule.len(), 1);
    assert_eq!(by_schedule[0].id, schedule_photo.id);
    assert_eq!(by_team.len(), 1);
    assert_eq!(by_team[0].id, team_photo.id);

    Ok(())
}

/// Tests deleting a photo record.
///
/// Expected: Ok with the photo no longer found
#[tokio::test]
async fn deletes_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_photo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PhotoRepository::new(db);
    let created = repo.create(photo(user.id, None, None)).await?;
    repo.delete(created.id).await?;

    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
