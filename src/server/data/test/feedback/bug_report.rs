use super::*;

fn report(user_id: i32, title: &str) -> CreateBugReportParams {
    CreateBugReportParams {
        user_id,
        title: title.to_string(),
        description: "Steps to reproduce".to_string(),
        page_url: Some("/schedules/1".to_string()),
    }
}

/// Tests that resolved reports sort after unresolved ones.
///
/// Expected: Ok with the unresolved report first and a total of 2
#[tokio::test]
async fn lists_unresolved_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FeedbackRepository::new(db);
    let open = repo.create_bug_report(report(user.id, "open")).await?;
    let resolved = repo.create_bug_report(report(user.id, "resolved")).await?;
    assert!(repo.resolve_bug_report(resolved.id).await?);

    let (reports, total) = repo.get_bug_reports_paginated(0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(reports[0].id, open.id);
    assert!(reports[1].is_resolved);

    Ok(())
}

/// Tests resolving a report that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn resolve_missing_report() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);

    assert!(!repo.resolve_bug_report(7).await?);

    Ok(())
}
