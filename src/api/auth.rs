use placement_shared::protocol::{
    ChangePasswordRequest, Empty, LoginRequest, MeRequest, ProfileRequest, RegisterRequest,
};
use placement_shared::{Envelope, User, UserProfile};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::HttpClient;

/// `/auth/*`
pub struct AuthApi<'a, C: HttpClient> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> AuthApi<'a, C> {
    pub(crate) fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<Envelope<User>, ApiError> {
        self.client.send(req).await
    }

    /// 成功时信封顶层带有 `token`
    pub async fn login(&self, req: &LoginRequest) -> Result<Envelope<User>, ApiError> {
        self.client.send(req).await
    }

    pub async fn me(&self) -> Result<Envelope<User>, ApiError> {
        self.client.send(&MeRequest).await
    }

    /// 同一个端点，按可编辑资料解析（保留 bio 等可选字段）
    pub async fn profile(&self) -> Result<Envelope<UserProfile>, ApiError> {
        self.client.send(&ProfileRequest).await
    }

    pub async fn update_profile(&self, profile: &UserProfile) -> Result<Envelope<User>, ApiError> {
        self.client.send(profile).await
    }

    pub async fn change_password(
        &self,
        req: &ChangePasswordRequest,
    ) -> Result<Envelope<Empty>, ApiError> {
        self.client.send(req).await
    }
}
