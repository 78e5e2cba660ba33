use super::*;

/// Tests listing a team's schedules as host and as invited team.
///
/// Expected: Ok with both schedules ordered by start time
#[tokio::test]
async fn lists_hosted_and_invited_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (other_owner, other) = factory::helpers::create_team_with_owner(db).await?;

    let later = factory::schedule::ScheduleFactory::new(db, team.id, owner.id)
        .start_time(Utc::now() + Duration::days(10))
        .build()
        .await?;
    let sooner = factory::schedule::ScheduleFactory::new(db, other.id, other_owner.id)
        .match_type(MatchType::Team)
        .invited_team_id(Some(team.id))
        .start_time(Utc::now() + Duration::days(5))
        .vote_deadline(Utc::now() + Duration::days(4))
        .build()
        .await?;
    factory::create_schedule(db, other.id, other_owner.id).await?;

    let repo = ScheduleRepository::new(db);
    let schedules = repo.get_by_team(team.id).await?;

    let ids: Vec<i32> = schedules.iter().map(|s| s.schedule.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);
    assert_eq!(schedules[0].host_team_name, other.name);

    Ok(())
}
