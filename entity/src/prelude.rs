pub use super::bug_report::Entity as BugReport;
pub use super::comment::Entity as Comment;
pub use super::feedback::Entity as Feedback;
pub use super::game_match::Entity as GameMatch;
pub use super::goal_record::Entity as GoalRecord;
pub use super::lineup::Entity as Lineup;
pub use super::photo::Entity as Photo;
pub use super::post::Entity as Post;
pub use super::schedule::Entity as Schedule;
pub use super::schedule_attendance::Entity as ScheduleAttendance;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::user::Entity as User;
