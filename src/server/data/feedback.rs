//! Feedback and bug report repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::feedback::{BugReport, CreateBugReportParams};

pub struct FeedbackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores free-form feedback. `user_id` is `None` for anonymous submissions.
    pub async fn create_feedback(
        &self,
        user_id: Option<i32>,
        content: String,
    ) -> Result<entity::feedback::Model, DbErr> {
        entity::feedback::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn create_bug_report(
        &self,
        params: CreateBugReportParams,
    ) -> Result<BugReport, DbErr> {
        let entity = entity::bug_report::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            page_url: ActiveValue::Set(params.page_url),
            is_resolved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BugReport::from_entity(entity))
    }

    /// Gets bug reports, unresolved first, then newest first.
    ///
    /// # Returns
    /// - `Ok((reports, total))` - Reports for the page and the total number of reports
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_bug_reports_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<BugReport>, u64), DbErr> {
        let paginator = entity::prelude::BugReport::find()
            .order_by_asc(entity::bug_report::Column::IsResolved)
            .order_by_desc(entity::bug_report::Column::CreatedAt)
            .order_by_desc(entity::bug_report::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let reports = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(BugReport::from_entity)
            .collect();

        Ok((reports, total))
    }

    /// Marks a bug report resolved.
    ///
    /// # Returns
    /// - `Ok(true)` - Report updated
    /// - `Ok(false)` - No report with that ID
    pub async fn resolve_bug_report(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BugReport::update_many()
            .filter(entity::bug_report::Column::Id.eq(id))
            .col_expr(entity::bug_report::Column::IsResolved, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
