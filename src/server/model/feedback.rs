use chrono::{DateTime, Utc};

use crate::model::feedback::{BugReportDto, PaginatedBugReportsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct BugReport {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub page_url: Option<String>,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl BugReport {
    pub fn from_entity(entity: entity::bug_report::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            page_url: entity.page_url,
            is_resolved: entity.is_resolved,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BugReportDto {
        BugReportDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            page_url: self.page_url,
            is_resolved: self.is_resolved,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBugReports {
    pub reports: Vec<BugReport>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBugReports {
    pub fn into_dto(self) -> PaginatedBugReportsDto {
        PaginatedBugReportsDto {
            reports: self.reports.into_iter().map(BugReport::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBugReportParams {
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub page_url: Option<String>,
}
