use placement_shared::protocol::SuggestionsRequest;
use placement_shared::{
    CoverLetter, CoverLetterRequest, Envelope, InterviewPrep, InterviewPrepRequest,
    JobRecommendation, JobRecommendationQuery, ResumeAnalysis, ResumeAnalysisRequest, Suggestions,
};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::HttpClient;

/// `/ai/*`，生成内容由后端调用模型完成
pub struct AiApi<'a, C: HttpClient> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> AiApi<'a, C> {
    pub(crate) fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn cover_letter(&self, req: &CoverLetterRequest) -> Result<Envelope<CoverLetter>, ApiError> {
        self.client.send(req).await
    }

    pub async fn resume_analysis(
        &self,
        req: &ResumeAnalysisRequest,
    ) -> Result<Envelope<ResumeAnalysis>, ApiError> {
        self.client.send(req).await
    }

    pub async fn interview_prep(
        &self,
        req: &InterviewPrepRequest,
    ) -> Result<Envelope<InterviewPrep>, ApiError> {
        self.client.send(req).await
    }

    pub async fn suggestions(&self) -> Result<Envelope<Suggestions>, ApiError> {
        self.client.send(&SuggestionsRequest).await
    }

    pub async fn job_recommendations(
        &self,
        query: &JobRecommendationQuery,
    ) -> Result<Envelope<Vec<JobRecommendation>>, ApiError> {
        self.client.send(query).await
    }
}
