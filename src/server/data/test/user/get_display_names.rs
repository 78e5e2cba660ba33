use super::*;

/// Tests that display names prefer the nickname and fall back to the provider name.
///
/// Expected: Ok with one entry per existing user
#[tokio::test]
async fn prefers_nickname_over_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let with_nickname = factory::user::UserFactory::new(db)
        .name("Park Jisung")
        .nickname(Some("jspark"))
        .build()
        .await?;
    let without_nickname = factory::user::UserFactory::new(db)
        .name("Lee Youngpyo")
        .onboarded(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let names = repo
        .get_display_names(&[with_nickname.id, without_nickname.id, 999])
        .await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names[&with_nickname.id], "jspark");
    assert_eq!(names[&without_nickname.id], "Lee Youngpyo");

    Ok(())
}
