use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        post::{CreatePostParams, UpdatePostParams},
        user::User,
    },
    service::post::PostService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
