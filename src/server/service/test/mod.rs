mod comment;
mod feedback;
mod mvp;
mod post;
mod schedule;
mod team;
mod user;
