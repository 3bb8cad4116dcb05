use placement_shared::Envelope;
use placement_shared::protocol::{Empty, HealthRequest};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::HttpClient;

pub struct HealthApi<'a, C: HttpClient> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> HealthApi<'a, C> {
    pub(crate) fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    /// `GET /health`，只关心 `success`
    pub async fn check(&self) -> Result<Envelope<Empty>, ApiError> {
        self.client.send(&HealthRequest).await
    }
}
