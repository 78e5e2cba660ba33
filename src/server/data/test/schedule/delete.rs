use super::*;

/// Tests that deleting a schedule removes its attendance, matches and photos.
///
/// Expected: Ok with the photo's object key returned and no child rows left
#[tokio::test]
async fn delete_cascades_to_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    factory::create_attendance(db, schedule.id, owner.id, team.id).await?;
    let game_match = factory::create_match(db, schedule.id).await?;
    factory::create_lineup(
        db,
        game_match.id,
        owner.id,
        entity::sea_orm_active_enums::LineupSide::Home,
    )
    .await?;
    let photo = PhotoRepository::new(db)
        .create(CreatePhotoParams {
            uploader_id: owner.id,
            schedule_id: Some(schedule.id),
            team_id: None,
            object_key: "photos/2026/01/matchday.jpg".to_string(),
            url: "https://cdn.example.com/photos/2026/01/matchday.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
        })
        .await?;

    let repo = ScheduleRepository::new(db);
    let object_keys = repo.delete(schedule.id).await?;

    assert_eq!(object_keys, vec![photo.object_key]);

    assert!(repo.find_by_id(schedule.id).await?.is_none());
    assert!(entity::prelude::ScheduleAttendance::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::GameMatch::find().all(db).await?.is_empty());
    assert!(entity::prelude::Lineup::find().all(db).await?.is_empty());
    assert!(entity::prelude::Photo::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a schedule without photos.
///
/// Expected: Ok with no object keys
#[tokio::test]
async fn delete_without_photos_returns_no_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, schedule) = factory::helpers::create_squad_schedule_with_dependencies(db).await?;

    let object_keys = ScheduleRepository::new(db).delete(schedule.id).await?;

    assert!(object_keys.is_empty());

    Ok(())
}
