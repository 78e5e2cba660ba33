use super::*;

/// Tests career MVP totals.
///
/// The user wins one schedule outright and ties in another, so only the first counts as
/// an award while both count toward votes.
///
/// Expected: Ok((5, 1))
#[tokio::test]
async fn counts_votes_and_outright_awards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let rival = factory::helpers::create_team_player(db, team.id).await?;
    let won = factory::create_schedule(db, team.id, owner.id).await?;
    let tied = factory::create_schedule(db, team.id, owner.id).await?;

    factory::attendance::AttendanceFactory::new(db, won.id, owner.id, team.id)
        .mvp_count(3)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, won.id, rival.id, team.id)
        .mvp_count(1)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, tied.id, owner.id, team.id)
        .mvp_count(2)
        .build()
        .await?;
    factory::attendance::AttendanceFactory::new(db, tied.id, rival.id, team.id)
        .mvp_count(2)
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    assert_eq!(repo.get_mvp_totals_for_user(owner.id).await?, (5, 1));
    assert_eq!(repo.count_attended_by_user(owner.id).await?, 2);

    Ok(())
}
