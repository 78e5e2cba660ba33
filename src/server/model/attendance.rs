//! Attendance and MVP domain models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::AttendanceStatus;

use crate::model::attendance::{
    AttendanceDto, AttendanceStatusDto, AttendanceSummaryDto, MvpEntryDto, MvpResultDto,
};

/// A member's attendance vote for a schedule, which also carries their MVP ballot.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: i32,
    pub schedule_id: i32,
    pub user_id: i32,
    /// Side the member plays for.
    pub team_id: i32,
    pub status: AttendanceStatus,
    /// User this attendee voted for as MVP.
    pub mvp_target_id: Option<i32>,
    /// MVP votes this attendee has received.
    pub mvp_count: i32,
    pub updated_at: DateTime<Utc>,
}

impl Attendance {
    pub fn from_entity(entity: entity::schedule_attendance::Model) -> Self {
        Self {
            id: entity.id,
            schedule_id: entity.schedule_id,
            user_id: entity.user_id,
            team_id: entity.team_id,
            status: entity.status,
            mvp_target_id: entity.mvp_target_id,
            mvp_count: entity.mvp_count,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_attending(&self) -> bool {
        self.status == AttendanceStatus::Attend
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceWithUser {
    pub attendance: Attendance,
    pub user_name: String,
}

impl AttendanceWithUser {
    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            user_id: self.attendance.user_id,
            user_name: self.user_name,
            team_id: self.attendance.team_id,
            status: self.attendance.status.into(),
            updated_at: self.attendance.updated_at,
        }
    }
}

/// All attendance records of a schedule with per-status counts.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSummary {
    pub records: Vec<AttendanceWithUser>,
    pub attend: u64,
    pub absent: u64,
    pub undecided: u64,
}

impl AttendanceSummary {
    pub fn from_records(records: Vec<AttendanceWithUser>) -> Self {
        let count = |status: AttendanceStatus| {
            records
                .iter()
                .filter(|r| r.attendance.status == status)
                .count() as u64
        };

        Self {
            attend: count(AttendanceStatus::Attend),
            absent: count(AttendanceStatus::Absent),
            undecided: count(AttendanceStatus::Undecided),
            records,
        }
    }

    pub fn into_dto(self) -> AttendanceSummaryDto {
        AttendanceSummaryDto {
            records: self
                .records
                .into_iter()
                .map(AttendanceWithUser::into_dto)
                .collect(),
            attend: self.attend,
            absent: self.absent,
            undecided: self.undecided,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VoteAttendanceParams {
    pub schedule_id: i32,
    pub user_id: i32,
    pub team_id: i32,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MvpEntry {
    pub user_id: i32,
    pub user_name: String,
    pub votes: i32,
}

/// MVP standings of a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct MvpResult {
    /// Attendees with at least one vote, most votes first.
    pub entries: Vec<MvpEntry>,
    /// The single attendee with the most votes, `None` on a tie or when nobody voted.
    pub mvp_user_id: Option<i32>,
}

impl MvpResult {
    pub fn from_entries(mut entries: Vec<MvpEntry>) -> Self {
        entries.retain(|e| e.votes > 0);
        entries.sort_by(|a, b| {
            b.votes
                .cmp(&a.votes)
                .then_with(|| a.user_name.cmp(&b.user_name))
        });

        let mvp_user_id = match entries.as_slice() {
            [first, second, ..] if first.votes == second.votes => None,
            [first, ..] => Some(first.user_id),
            [] => None,
        };

        Self {
            entries,
            mvp_user_id,
        }
    }

    pub fn into_dto(self) -> MvpResultDto {
        MvpResultDto {
            entries: self
                .entries
                .into_iter()
                .map(|e| MvpEntryDto {
                    user_id: e.user_id,
                    user_name: e.user_name,
                    votes: e.votes,
                })
                .collect(),
            mvp_user_id: self.mvp_user_id,
        }
    }
}

impl From<AttendanceStatus> for AttendanceStatusDto {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Attend => Self::Attend,
            AttendanceStatus::Absent => Self::Absent,
            AttendanceStatus::Undecided => Self::Undecided,
        }
    }
}

impl From<AttendanceStatusDto> for AttendanceStatus {
    fn from(status: AttendanceStatusDto) -> Self {
        match status {
            AttendanceStatusDto::Attend => Self::Attend,
            AttendanceStatusDto::Absent => Self::Absent,
            AttendanceStatusDto::Undecided => Self::Undecided,
        }
    }
}
