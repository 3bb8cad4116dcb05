//! 求职申请模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// 枚举
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Screening,
    Interview,
    Offer,
    Accepted,
    Rejected,
    Withdrawn,
    /// 后端新增但客户端未知的状态
    #[serde(other)]
    Other,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 7] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Screening,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ];

    /// 线上传输用的字符串（同时用作查询参数）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Screening => "screening",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
            Self::Other => "other",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
            Self::Other => "Other",
        }
    }

    /// 图表配色
    pub fn color(&self) -> &'static str {
        match self {
            Self::Applied => "#3B82F6",
            Self::Screening => "#F59E0B",
            Self::Interview => "#10B981",
            Self::Offer => "#8B5CF6",
            Self::Accepted => "#059669",
            Self::Rejected => "#EF4444",
            Self::Withdrawn | Self::Other => "#6B7280",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
    #[serde(other)]
    Other,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
            Self::Other => "other",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
            Self::Other => "Other",
        }
    }
}

// =========================================================
// 嵌套结构
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.state.is_empty() && self.country.is_empty()
    }

    /// "City, State, Country"，跳过空字段
    pub fn display(&self) -> String {
        [&self.city, &self.state, &self.country]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    #[serde(rename = "type", default = "default_position_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

fn default_position_type() -> String {
    "full-time".to_string()
}

impl Default for Position {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: default_position_type(),
            level: Some("entry".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    #[serde(default)]
    pub min: u64,
    #[serde(default)]
    pub max: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Salary {
    fn default() -> Self {
        Self {
            min: 0,
            max: 0,
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetails {
    #[serde(default)]
    pub job_posting_url: String,
    #[serde(default)]
    pub cover_letter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub content: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub interviewer: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

// =========================================================
// 申请记录
// =========================================================

/// 后端持久化的申请记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub company: Company,
    pub position: Position,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_details: Option<ApplicationDetails>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<Note>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interviews: Vec<Interview>,
}

/// 创建 / 更新申请的表单载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub company: Company,
    pub position: Position,
    pub status: ApplicationStatus,
    pub priority: Priority,
    pub salary: Salary,
    pub application_details: ApplicationDetails,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            company: Company {
                name: String::new(),
                website: Some(String::new()),
                location: Some(Location::default()),
            },
            position: Position::default(),
            status: ApplicationStatus::Applied,
            priority: Priority::Medium,
            salary: Salary::default(),
            application_details: ApplicationDetails::default(),
        }
    }
}

impl From<&Application> for ApplicationForm {
    /// 编辑已有记录时回填表单（申请详情不回填）
    fn from(app: &Application) -> Self {
        Self {
            company: app.company.clone(),
            position: app.position.clone(),
            status: app.status,
            priority: app.priority,
            salary: app.salary.clone().unwrap_or_default(),
            application_details: ApplicationDetails::default(),
        }
    }
}

/// 列表过滤条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationFilter {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
}

/// `/applications/stats` 汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub by_status: std::collections::HashMap<String, u32>,
}

/// 新增备注
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteInput {
    pub content: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// 新增面试安排
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewInput {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_falls_back() {
        let s: ApplicationStatus = serde_json::from_str(r#""ghosted""#).unwrap();
        assert_eq!(s, ApplicationStatus::Other);
        assert_eq!(
            ApplicationStatus::from_str_opt("offer"),
            Some(ApplicationStatus::Offer)
        );
        assert_eq!(ApplicationStatus::from_str_opt("other"), None);
    }

    #[test]
    fn test_form_defaults_match_new_application_dialog() {
        let form = ApplicationForm::default();
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["position"]["type"], "full-time");
        assert_eq!(json["position"]["level"], "entry");
        assert_eq!(json["status"], "applied");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["salary"]["currency"], "USD");
        assert_eq!(json["applicationDetails"]["jobPostingUrl"], "");
    }

    #[test]
    fn test_application_decodes_minimal_record() {
        let json = r#"{
            "_id": "a1",
            "company": {"name": "Google"},
            "position": {"title": "SWE"},
            "status": "interview",
            "timeline": {"appliedAt": "2024-01-15T00:00:00Z"}
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.status, ApplicationStatus::Interview);
        assert_eq!(app.priority, Priority::Medium);
        assert_eq!(app.position.kind, "full-time");
        assert!(app.timeline.applied_at.is_some());
    }

    #[test]
    fn test_location_display_skips_empty() {
        let loc = Location {
            city: "Berlin".into(),
            state: String::new(),
            country: "DE".into(),
        };
        assert_eq!(loc.display(), "Berlin, DE");
        assert!(Location::default().is_empty());
    }
}
