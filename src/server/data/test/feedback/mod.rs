use crate::server::{data::feedback::FeedbackRepository, model::feedback::CreateBugReportParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod bug_report;
mod create_feedback;
