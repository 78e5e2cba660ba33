use crate::server::{
    error::AppError, model::feedback::CreateBugReportParams, service::feedback::FeedbackService,
};
use test_utils::{builder::TestBuilder, factory};

mod submit;
