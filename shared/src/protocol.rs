use crate::{
    Application, ApplicationFilter, ApplicationForm, ApplicationStats, ApplicationTrend,
    CoverLetter, CoverLetterRequest, DashboardStats, InterviewInput, InterviewPrep,
    InterviewPrepRequest, JobRecommendation, JobRecommendationQuery, MonthlyGoal, NoteInput,
    RecentActivity, ResumeAnalysis, ResumeAnalysisRequest, StatusDistribution, Suggestions, User,
    UserProfile,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Placeholder response type for endpoints whose `data` the client never reads.
pub type Empty = serde::de::IgnoredAny;

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// The response is always wrapped in [`crate::Envelope`]; `Response` is the type of its `data`.
pub trait ApiRequest: Serialize {
    /// The type carried in the envelope's `data` field.
    type Response: DeserializeOwned;
    /// Path template relative to the base URL. `:name` segments are filled from `path_params`.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// Values for the `:name` segments of `PATH`, in order.
    fn path_params(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Query parameters. Absent optional parameters are left out.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON body. GET and DELETE never carry one.
    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        match Self::METHOD {
            HttpMethod::Get | HttpMethod::Delete => Ok(None),
            HttpMethod::Post | HttpMethod::Put => serde_json::to_value(self).map(Some),
        }
    }
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ApiRequest for RegisterRequest {
    type Response = User;
    const PATH: &'static str = "/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = User;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Current user identity check
#[derive(Debug, Serialize, Deserialize)]
pub struct MeRequest;

impl ApiRequest for MeRequest {
    type Response = User;
    const PATH: &'static str = "/auth/me";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// The same identity check, read as the editable profile so optional fields survive.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRequest;

impl ApiRequest for ProfileRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/auth/me";
    const METHOD: HttpMethod = HttpMethod::Get;
}

// The profile form is sent as-is.
impl ApiRequest for UserProfile {
    type Response = User;
    const PATH: &'static str = "/auth/profile";
    const METHOD: HttpMethod = HttpMethod::Put;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl ApiRequest for ChangePasswordRequest {
    type Response = Empty;
    const PATH: &'static str = "/auth/password";
    const METHOD: HttpMethod = HttpMethod::Put;
}

// =========================================================
// Applications
// =========================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListApplicationsRequest {
    pub filter: ApplicationFilter,
}

impl ApiRequest for ListApplicationsRequest {
    type Response = Vec<Application>;
    const PATH: &'static str = "/applications";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        let company = self.filter.company.trim();
        if !company.is_empty() {
            query.push(("company", company.to_string()));
        }
        if let Some(status) = self.filter.status {
            query.push(("status", status.as_str().to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetApplicationRequest {
    pub id: String,
}

impl ApiRequest for GetApplicationRequest {
    type Response = Application;
    const PATH: &'static str = "/applications/:id";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path_params(&self) -> Vec<&str> {
        vec![self.id.as_str()]
    }
}

/// Create a new application (the form itself is the body)
impl ApiRequest for ApplicationForm {
    type Response = Application;
    const PATH: &'static str = "/applications";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub form: ApplicationForm,
}

impl ApiRequest for UpdateApplicationRequest {
    type Response = Application;
    const PATH: &'static str = "/applications/:id";
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path_params(&self) -> Vec<&str> {
        vec![self.id.as_str()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteApplicationRequest {
    pub id: String,
}

impl ApiRequest for DeleteApplicationRequest {
    type Response = Empty;
    const PATH: &'static str = "/applications/:id";
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path_params(&self) -> Vec<&str> {
        vec![self.id.as_str()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddNoteRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub note: NoteInput,
}

impl ApiRequest for AddNoteRequest {
    type Response = Application;
    const PATH: &'static str = "/applications/:id/notes";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path_params(&self) -> Vec<&str> {
        vec![self.id.as_str()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddInterviewRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub interview: InterviewInput,
}

impl ApiRequest for AddInterviewRequest {
    type Response = Application;
    const PATH: &'static str = "/applications/:id/interviews";
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path_params(&self) -> Vec<&str> {
        vec![self.id.as_str()]
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicationStatsRequest;

impl ApiRequest for ApplicationStatsRequest {
    type Response = ApplicationStats;
    const PATH: &'static str = "/applications/stats";
    const METHOD: HttpMethod = HttpMethod::Get;
}

// =========================================================
// Analytics
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardStatsRequest;

impl ApiRequest for DashboardStatsRequest {
    type Response = DashboardStats;
    const PATH: &'static str = "/analytics/dashboard";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendsRequest {
    pub months: Option<u32>,
}

impl ApiRequest for TrendsRequest {
    type Response = Vec<ApplicationTrend>;
    const PATH: &'static str = "/analytics/trends";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn query(&self) -> Vec<(&'static str, String)> {
        self.months
            .map(|m| vec![("months", m.to_string())])
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusDistributionRequest;

impl ApiRequest for StatusDistributionRequest {
    type Response = Vec<StatusDistribution>;
    const PATH: &'static str = "/analytics/status-distribution";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoalsRequest;

impl ApiRequest for GoalsRequest {
    type Response = Vec<MonthlyGoal>;
    const PATH: &'static str = "/analytics/goals";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentActivityRequest {
    pub limit: Option<u32>,
}

impl ApiRequest for RecentActivityRequest {
    type Response = Vec<RecentActivity>;
    const PATH: &'static str = "/analytics/recent-activity";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn query(&self) -> Vec<(&'static str, String)> {
        self.limit
            .map(|l| vec![("limit", l.to_string())])
            .unwrap_or_default()
    }
}

// =========================================================
// AI
// =========================================================

impl ApiRequest for CoverLetterRequest {
    type Response = CoverLetter;
    const PATH: &'static str = "/ai/cover-letter";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for ResumeAnalysisRequest {
    type Response = ResumeAnalysis;
    const PATH: &'static str = "/ai/resume-analysis";
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for InterviewPrepRequest {
    type Response = InterviewPrep;
    const PATH: &'static str = "/ai/interview-prep";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsRequest;

impl ApiRequest for SuggestionsRequest {
    type Response = Suggestions;
    const PATH: &'static str = "/ai/suggestions";
    const METHOD: HttpMethod = HttpMethod::Post;

    // POST without a body
    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(None)
    }
}

impl ApiRequest for JobRecommendationQuery {
    type Response = Vec<JobRecommendation>;
    const PATH: &'static str = "/ai/job-recommendations";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn query(&self) -> Vec<(&'static str, String)> {
        [
            ("location", &self.location),
            ("remote", &self.remote),
            ("experience", &self.experience),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }
}

// =========================================================
// Health
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthRequest;

impl ApiRequest for HealthRequest {
    type Response = Empty;
    const PATH: &'static str = "/health";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApplicationStatus;

    #[test]
    fn test_update_body_excludes_id() {
        let req = UpdateApplicationRequest {
            id: "a1".into(),
            form: ApplicationForm::default(),
        };
        let body = req.body().unwrap().unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["status"], "applied");
        assert_eq!(req.path_params(), vec!["a1"]);
    }

    #[test]
    fn test_list_query_skips_blank_filters() {
        let req = ListApplicationsRequest::default();
        assert!(req.query().is_empty());

        let req = ListApplicationsRequest {
            filter: ApplicationFilter {
                company: "  Acme ".into(),
                status: Some(ApplicationStatus::Offer),
            },
        };
        assert_eq!(
            req.query(),
            vec![("company", "Acme".to_string()), ("status", "offer".to_string())]
        );
    }

    #[test]
    fn test_get_has_no_body() {
        assert!(MeRequest.body().unwrap().is_none());
        assert!(SuggestionsRequest.body().unwrap().is_none());
        let login = LoginRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
        };
        assert_eq!(login.body().unwrap().unwrap()["email"], "a@b.c");
    }

    #[test]
    fn test_job_recommendation_query() {
        let q = JobRecommendationQuery {
            location: Some("Remote".into()),
            remote: None,
            experience: Some("senior".into()),
        };
        assert_eq!(
            q.query(),
            vec![
                ("location", "Remote".to_string()),
                ("experience", "senior".to_string())
            ]
        );
    }
}
