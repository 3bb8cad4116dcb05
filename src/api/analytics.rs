use placement_shared::protocol::{
    DashboardStatsRequest, GoalsRequest, RecentActivityRequest, StatusDistributionRequest,
    TrendsRequest,
};
use placement_shared::{
    ApplicationTrend, DashboardStats, Envelope, MonthlyGoal, RecentActivity, StatusDistribution,
};

use crate::client::{ApiClient, EnvelopeExt};
use crate::error::ApiError;
use crate::request::HttpClient;

/// `/analytics/*`
pub struct AnalyticsApi<'a, C: HttpClient> {
    client: &'a ApiClient<C>,
}

/// 仪表盘 / 分析页一次加载的全部数据
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub trends: Vec<ApplicationTrend>,
    pub distribution: Vec<StatusDistribution>,
    pub goals: Vec<MonthlyGoal>,
    pub recent: Vec<RecentActivity>,
}

/// `None` 表示使用后端默认值
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotQuery {
    pub months: Option<u32>,
    pub limit: Option<u32>,
}

impl<'a, C: HttpClient> AnalyticsApi<'a, C> {
    pub(crate) fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn dashboard(&self) -> Result<Envelope<DashboardStats>, ApiError> {
        self.client.send(&DashboardStatsRequest).await
    }

    pub async fn trends(&self, months: Option<u32>) -> Result<Envelope<Vec<ApplicationTrend>>, ApiError> {
        self.client.send(&TrendsRequest { months }).await
    }

    pub async fn status_distribution(&self) -> Result<Envelope<Vec<StatusDistribution>>, ApiError> {
        self.client.send(&StatusDistributionRequest).await
    }

    pub async fn goals(&self) -> Result<Envelope<Vec<MonthlyGoal>>, ApiError> {
        self.client.send(&GoalsRequest).await
    }

    pub async fn recent_activity(
        &self,
        limit: Option<u32>,
    ) -> Result<Envelope<Vec<RecentActivity>>, ApiError> {
        self.client.send(&RecentActivityRequest { limit }).await
    }

    /// 并发请求五个分析端点，全部成功才返回
    ///
    /// 任一请求失败（包括 `success: false`）即整体失败，不返回部分数据。
    pub async fn snapshot(&self, query: SnapshotQuery) -> Result<DashboardSnapshot, ApiError> {
        let (stats, trends, distribution, goals, recent) = futures::try_join!(
            async { self.dashboard().await.and_then(|env| env.into_data()) },
            async { self.trends(query.months).await.and_then(|env| env.into_data()) },
            async { self.status_distribution().await.and_then(|env| env.into_data()) },
            async { self.goals().await.and_then(|env| env.into_data()) },
            async { self.recent_activity(query.limit).await.and_then(|env| env.into_data()) },
        )?;

        Ok(DashboardSnapshot {
            stats,
            trends,
            distribution,
            goals,
            recent,
        })
    }
}
