use crate::server::{
    error::AppError,
    model::{post::CreateCommentParams, user::User},
    service::comment::CommentService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn reply(post_id: i32, author_id: i32, parent_id: i32) -> CreateCommentParams {
    CreateCommentParams {
        post_id,
        author_id,
        parent_id: Some(parent_id),
        content: "Agreed".to_string(),
    }
}
