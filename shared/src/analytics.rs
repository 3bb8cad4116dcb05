//! 统计分析模型
//!
//! 这些结构由后端聚合计算，客户端只负责展示，所有字段都允许缺省。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ApplicationStatus, Company, Position};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_applications: u32,
    pub active_applications: u32,
    pub interviews_scheduled: u32,
    pub offers_received: u32,
    /// 百分比 (0-100)
    pub acceptance_rate: f64,
    /// 平均响应时间（天）
    pub average_response_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationTrend {
    pub month: String,
    pub applications: u32,
    pub interviews: u32,
    pub offers: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusDistribution {
    pub status: String,
    pub count: u32,
    pub percentage: f64,
}

impl StatusDistribution {
    pub fn status_kind(&self) -> ApplicationStatus {
        ApplicationStatus::from_str_opt(&self.status).unwrap_or(ApplicationStatus::Other)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyGoal {
    pub month: String,
    pub target: u32,
    pub achieved: u32,
    pub percentage: f64,
}

impl MonthlyGoal {
    /// 进度条宽度，限制在 0..=100
    pub fn progress(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }
}

/// 最近动态：精简版申请记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub company: Company,
    pub position: Position,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub timeline: ActivityTimeline,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTimeline {
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}
