mod attendance;
mod feedback;
mod game_match;
mod goal;
mod photo;
mod team;
mod team_member;
mod user;
