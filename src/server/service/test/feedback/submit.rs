use super::*;

/// Tests feedback length limits.
///
/// Expected: 2000 characters accepted anonymously, empty and 2001 rejected
#[tokio::test]
async fn feedback_length() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FeedbackService::new(db);
    service.submit_feedback(None, "a".repeat(2000)).await?;

    for content in [String::new(), "   ".to_string(), "a".repeat(2001)] {
        let result = service.submit_feedback(None, content).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests filing and resolving a bug report.
///
/// Expected: report listed, resolved flag set, unknown ID gives NotFound
#[tokio::test]
async fn bug_report_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = FeedbackService::new(db);
    let report = service
        .submit_bug_report(CreateBugReportParams {
            user_id: user.id,
            title: "Score not updating".to_string(),
            description: "Adding a goal leaves the score at 0".to_string(),
            page_url: Some("/schedules/1".to_string()),
        })
        .await?;

    service.resolve_bug_report(report.id).await?;

    let page = service.list_bug_reports(0, 10).await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.reports[0].is_resolved);

    let missing = service.resolve_bug_report(999).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a bug report without a title.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn bug_report_requires_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_feedback_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = FeedbackService::new(db)
        .submit_bug_report(CreateBugReportParams {
            user_id: user.id,
            title: " ".to_string(),
            description: "Something".to_string(),
            page_url: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
