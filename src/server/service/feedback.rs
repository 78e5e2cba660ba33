//! User feedback and bug reports.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::feedback::FeedbackRepository,
    error::AppError,
    model::feedback::{BugReport, CreateBugReportParams, PaginatedBugReports},
};

const MAX_FEEDBACK_LENGTH: usize = 2000;

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores feedback text, 1 to 2000 characters. `user_id` is `None` when anonymous.
    pub async fn submit_feedback(
        &self,
        user_id: Option<i32>,
        content: String,
    ) -> Result<(), AppError> {
        let length = content.trim().chars().count();
        if length == 0 || length > MAX_FEEDBACK_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Feedback must be between 1 and {} characters",
                MAX_FEEDBACK_LENGTH
            )));
        }

        FeedbackRepository::new(self.db)
            .create_feedback(user_id, content)
            .await?;

        Ok(())
    }

    pub async fn submit_bug_report(
        &self,
        params: CreateBugReportParams,
    ) -> Result<BugReport, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        if params.description.trim().is_empty() {
            return Err(AppError::BadRequest("Description is required".to_string()));
        }

        let report = FeedbackRepository::new(self.db)
            .create_bug_report(params)
            .await?;

        tracing::info!("Bug report {} filed by user {}", report.id, report.user_id);

        Ok(report)
    }

    pub async fn list_bug_reports(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBugReports, AppError> {
        let (reports, total) = FeedbackRepository::new(self.db)
            .get_bug_reports_paginated(page, per_page)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedBugReports {
            reports,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn resolve_bug_report(&self, id: i32) -> Result<(), AppError> {
        if !FeedbackRepository::new(self.db)
            .resolve_bug_report(id)
            .await?
        {
            return Err(AppError::NotFound("Bug report not found".to_string()));
        }

        Ok(())
    }
}
