use placement_shared::protocol::{
    AddInterviewRequest, AddNoteRequest, ApplicationStatsRequest, DeleteApplicationRequest, Empty,
    GetApplicationRequest, ListApplicationsRequest, UpdateApplicationRequest,
};
use placement_shared::{
    Application, ApplicationFilter, ApplicationForm, ApplicationStats, Envelope, InterviewInput,
    NoteInput,
};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::HttpClient;

/// `/applications/*`
pub struct ApplicationsApi<'a, C: HttpClient> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> ApplicationsApi<'a, C> {
    pub(crate) fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    /// 空的公司名和未选择的状态不会出现在查询串里
    pub async fn list(&self, filter: &ApplicationFilter) -> Result<Envelope<Vec<Application>>, ApiError> {
        let req = ListApplicationsRequest {
            filter: filter.clone(),
        };
        self.client.send(&req).await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<Application>, ApiError> {
        self.client
            .send(&GetApplicationRequest { id: id.to_string() })
            .await
    }

    pub async fn create(&self, form: &ApplicationForm) -> Result<Envelope<Application>, ApiError> {
        self.client.send(form).await
    }

    pub async fn update(
        &self,
        id: &str,
        form: &ApplicationForm,
    ) -> Result<Envelope<Application>, ApiError> {
        let req = UpdateApplicationRequest {
            id: id.to_string(),
            form: form.clone(),
        };
        self.client.send(&req).await
    }

    pub async fn delete(&self, id: &str) -> Result<Envelope<Empty>, ApiError> {
        self.client
            .send(&DeleteApplicationRequest { id: id.to_string() })
            .await
    }

    pub async fn add_note(&self, id: &str, note: &NoteInput) -> Result<Envelope<Application>, ApiError> {
        let req = AddNoteRequest {
            id: id.to_string(),
            note: note.clone(),
        };
        self.client.send(&req).await
    }

    pub async fn add_interview(
        &self,
        id: &str,
        interview: &InterviewInput,
    ) -> Result<Envelope<Application>, ApiError> {
        let req = AddInterviewRequest {
            id: id.to_string(),
            interview: interview.clone(),
        };
        self.client.send(&req).await
    }

    pub async fn stats(&self) -> Result<Envelope<ApplicationStats>, ApiError> {
        self.client.send(&ApplicationStatsRequest).await
    }
}
