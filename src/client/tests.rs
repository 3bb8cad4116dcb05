use super::*;
use crate::credentials::CredentialStore;
use crate::request::MockReply;
use crate::testing::{Fixture, TOKEN, failure, ok, url, user_json};
use placement_shared::protocol::{
    DeleteApplicationRequest, GetApplicationRequest, HttpMethod, ListApplicationsRequest,
    LoginRequest, MeRequest,
};
use placement_shared::{ApplicationFilter, ApplicationStatus, User};
use std::cell::Cell;
use std::time::Duration;

struct CountingObserver {
    calls: Cell<usize>,
}

impl AuthObserver for CountingObserver {
    fn on_credentials_revoked(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[tokio::test]
async fn test_bearer_header_attached_when_token_present() {
    let fx = Fixture::logged_in();
    fx.http()
        .mock_response(HttpMethod::Get, &url("/auth/me"), 200, ok(user_json()));

    let env = fx.client.send(&MeRequest).await.unwrap();
    assert!(env.success);

    let req = fx.http().last_request().unwrap();
    assert_eq!(
        req.header("Authorization"),
        Some(format!("Bearer {}", TOKEN).as_str())
    );
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.timeout, Some(Duration::from_secs(10)));
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let fx = Fixture::new();
    fx.http()
        .mock_response(HttpMethod::Get, &url("/auth/me"), 200, ok(user_json()));

    fx.client.send(&MeRequest).await.unwrap();

    let req = fx.http().last_request().unwrap();
    assert_eq!(req.header("Authorization"), None);
}

#[tokio::test]
async fn test_401_clears_token_notifies_and_redirects() {
    let fx = Fixture::logged_in();
    let observer = Rc::new(CountingObserver {
        calls: Cell::new(0),
    });
    let weak: Weak<CountingObserver> = Rc::downgrade(&observer);
    fx.client.subscribe(weak);

    fx.http().mock_response(
        HttpMethod::Get,
        &url("/auth/me"),
        401,
        failure("Not authorized, token failed"),
    );

    let err = fx.client.send(&MeRequest).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized {
            message: Some("Not authorized, token failed".into())
        }
    );
    assert_eq!(fx.credentials.token(), None);
    assert_eq!(observer.calls.get(), 1);
    assert_eq!(fx.navigator.redirects(), 1);

    // 第二次 401 不会带上已清除的 Token
    fx.client.send(&MeRequest).await.unwrap_err();
    assert_eq!(fx.http().last_request().unwrap().header("Authorization"), None);
}

#[tokio::test]
async fn test_dropped_observer_is_skipped() {
    let fx = Fixture::logged_in();
    {
        let observer = Rc::new(CountingObserver {
            calls: Cell::new(0),
        });
        let weak: Weak<CountingObserver> = Rc::downgrade(&observer);
        fx.client.subscribe(weak);
    }
    fx.http()
        .mock_response(HttpMethod::Get, &url("/auth/me"), 401, failure("expired"));

    let err = fx.client.send(&MeRequest).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(fx.navigator.redirects(), 1);
}

#[tokio::test]
async fn test_error_status_with_message_is_rejected() {
    let fx = Fixture::new();
    fx.http().mock_response(
        HttpMethod::Post,
        &url("/auth/login"),
        400,
        failure("Please provide email and password"),
    );

    let req = LoginRequest {
        email: String::new(),
        password: String::new(),
    };
    let err = fx.client.send(&req).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            message: "Please provide email and password".into()
        }
    );
    assert_eq!(fx.navigator.redirects(), 0);
}

#[tokio::test]
async fn test_error_status_without_envelope() {
    let fx = Fixture::new();
    // 未注册的地址由 Mock 返回纯文本 404
    let err = fx
        .client
        .send(&GetApplicationRequest { id: "x".into() })
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404 });
}

#[tokio::test]
async fn test_unsuccessful_envelope_is_returned_to_caller() {
    let fx = Fixture::new();
    fx.http().mock_response(
        HttpMethod::Get,
        &url("/auth/me"),
        200,
        failure("User not found"),
    );

    let env = fx.client.send(&MeRequest).await.unwrap();
    assert!(!env.success);
    assert_eq!(
        env.into_data().unwrap_err(),
        ApiError::Unsuccessful {
            message: Some("User not found".into())
        }
    );
}

#[tokio::test]
async fn test_transport_errors_pass_through() {
    let fx = Fixture::logged_in();
    fx.http()
        .mock_reply(HttpMethod::Get, &url("/auth/me"), MockReply::Timeout);
    assert_eq!(
        fx.client.send(&MeRequest).await.unwrap_err(),
        ApiError::Timeout
    );

    fx.http()
        .mock_reply(HttpMethod::Get, &url("/auth/me"), MockReply::NetworkError);
    assert!(matches!(
        fx.client.send(&MeRequest).await.unwrap_err(),
        ApiError::Network(_)
    ));

    // 传输错误不会清除凭证
    assert_eq!(fx.credentials.token().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let fx = Fixture::new();
    fx.http()
        .mock_reply(
            HttpMethod::Get,
            &url("/auth/me"),
            MockReply::Response(200, "<html></html>".into()),
        );
    assert!(matches!(
        fx.client.send(&MeRequest).await.unwrap_err(),
        ApiError::Decode(_)
    ));
}

#[tokio::test]
async fn test_path_and_query_are_encoded() {
    let fx = Fixture::new();
    fx.http().set_handler(|_| Some(MockReply::Response(200, r#"{"success":true}"#.into())));

    fx.client
        .send(&DeleteApplicationRequest {
            id: "a b/c".into(),
        })
        .await
        .unwrap();
    let req = fx.http().last_request().unwrap();
    assert_eq!(req.url, url("/applications/a%20b%2Fc"));
    assert_eq!(req.method, HttpMethod::Delete);
    assert!(req.body.is_none());

    fx.client
        .send(&ListApplicationsRequest {
            filter: ApplicationFilter {
                company: "Acme & Co".into(),
                status: Some(ApplicationStatus::Interview),
            },
        })
        .await
        .unwrap();
    let req = fx.http().last_request().unwrap();
    assert_eq!(
        req.url,
        url("/applications?company=Acme+%26+Co&status=interview")
    );
}

#[tokio::test]
async fn test_post_carries_json_body() {
    let fx = Fixture::new();
    fx.http().mock_response(
        HttpMethod::Post,
        &url("/auth/login"),
        200,
        serde_json::json!({ "success": true, "token": TOKEN, "data": user_json() }),
    );

    let req = LoginRequest {
        email: "grace@example.com".into(),
        password: "secret".into(),
    };
    let env = fx.client.send(&req).await.unwrap();
    assert_eq!(env.token.as_deref(), Some(TOKEN));
    let user: User = env.into_data().unwrap();
    assert_eq!(user.name, "Grace Hopper");

    let sent = fx.http().last_request().unwrap();
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["email"], "grace@example.com");
    assert_eq!(body["password"], "secret");
}

#[tokio::test]
async fn test_invalid_base_url_is_build_error() {
    let client = ApiClient::new(
        crate::request::MockHttpClient::new(),
        ClientConfig::new("not a url"),
        Rc::new(crate::credentials::MemoryCredentialStore::new()),
        Rc::new(NoopNavigator),
    );
    assert!(matches!(
        client.send(&MeRequest).await.unwrap_err(),
        ApiError::Build(_)
    ));
    assert_eq!(client.http().request_count(), 0);
}
