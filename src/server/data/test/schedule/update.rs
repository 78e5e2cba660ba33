use super::*;

/// Tests updating a schedule's place and time window.
///
/// Expected: Ok with the new values and the status untouched
#[tokio::test]
async fn updates_place_and_times() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _team, schedule) =
        factory::helpers::create_squad_schedule_with_dependencies(db).await?;
    let start = Utc::now() + Duration::days(7);

    let repo = ScheduleRepository::new(db);
    let updated = repo
        .update(UpdateScheduleParams {
            id: schedule.id,
            place: "Jamsil Court B".to_string(),
            description: Some("Bring bibs".to_string()),
            start_time: start,
            end_time: start + Duration::hours(1),
            vote_deadline: start - Duration::hours(12),
        })
        .await?;

    assert_eq!(updated.place, "Jamsil Court B");
    assert_eq!(updated.description.as_deref(), Some("Bring bibs"));
    assert_eq!(updated.status, ScheduleStatus::Confirmed);

    Ok(())
}

/// Tests updating only the status.
///
/// Expected: Ok with status REJECTED persisted
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host_owner, _host, _invited_owner, _invited, schedule) =
        factory::helpers::create_team_schedule_with_dependencies(db, ScheduleStatus::Pending)
            .await?;

    let repo = ScheduleRepository::new(db);
    repo.update_status(schedule.id, ScheduleStatus::Rejected)
        .await?;

    let stored = repo.find_by_id(schedule.id).await?.unwrap();
    assert_eq!(stored.status, ScheduleStatus::Rejected);

    Ok(())
}
