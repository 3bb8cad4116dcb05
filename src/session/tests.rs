use super::*;
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::credentials::{CredentialStore, MemoryCredentialStore};
use crate::request::{MockHttpClient, MockReply};
use crate::testing::{Fixture, RecordingNavigator, TOKEN, failure, ok, url, user_json};
use placement_shared::protocol::HttpMethod;
use serde_json::json;
use std::cell::RefCell;

/// 记录每次状态迁移
fn record_transitions<C: HttpClient>(session: &Session<C>) -> Rc<RefCell<Vec<SessionState>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    session
        .store()
        .subscribe(move |state| sink.borrow_mut().push(state.clone()));
    log
}

fn login_success() -> serde_json::Value {
    json!({ "success": true, "token": TOKEN, "data": user_json() })
}

/// 写入总是失败的存储，模拟浏览器禁用或写满 LocalStorage
#[derive(Default)]
struct UnwritableStore;

impl CredentialStore for UnwritableStore {
    fn token(&self) -> Option<String> {
        None
    }

    fn set_token(&self, _token: &str) -> bool {
        false
    }

    fn clear(&self) {}
}

#[tokio::test]
async fn test_restore_without_token() {
    let fx = Fixture::new();
    let session = Session::new(fx.client.clone());
    assert!(session.state().is_loading());

    session.restore().await;

    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(fx.http().request_count(), 0);
}

#[tokio::test]
async fn test_restore_with_empty_token() {
    let credentials = Rc::new(MemoryCredentialStore::with_token(""));
    let client = Rc::new(ApiClient::new(
        MockHttpClient::new(),
        ClientConfig::default(),
        credentials,
        Rc::new(RecordingNavigator::default()),
    ));
    let session = Session::new(client.clone());

    session.restore().await;

    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(client.http().request_count(), 0);
}

#[tokio::test]
async fn test_restore_with_valid_token() {
    let fx = Fixture::logged_in();
    fx.http()
        .mock_response(HttpMethod::Get, &url("/auth/me"), 200, ok(user_json()));
    let session = Session::new(fx.client.clone());

    session.restore().await;

    let user = session.user().unwrap();
    assert_eq!(user.email, "grace@example.com");
    assert_eq!(fx.credentials.token().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn test_restore_with_rejected_token() {
    let fx = Fixture::logged_in();
    fx.http().mock_response(
        HttpMethod::Get,
        &url("/auth/me"),
        401,
        failure("Not authorized, token failed"),
    );
    let session = Session::new(fx.client.clone());
    let transitions = record_transitions(&session);

    session.restore().await;

    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(fx.credentials.token(), None);
    assert_eq!(*transitions.borrow(), vec![SessionState::Unauthenticated]);
}

#[tokio::test]
async fn test_restore_clears_token_on_network_failure() {
    let fx = Fixture::logged_in();
    fx.http()
        .mock_reply(HttpMethod::Get, &url("/auth/me"), MockReply::NetworkError);
    let session = Session::new(fx.client.clone());

    session.restore().await;

    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(fx.credentials.token(), None);
    assert_eq!(fx.navigator.redirects(), 0);
}

#[tokio::test]
async fn test_login_success_persists_token_and_user() {
    let fx = Fixture::new();
    fx.http()
        .mock_response(HttpMethod::Post, &url("/auth/login"), 200, login_success());
    let session = Session::new(fx.client.clone());
    session.restore().await;

    assert!(session.login("grace@example.com", "secret").await);

    assert_eq!(fx.credentials.token().as_deref(), Some(TOKEN));
    assert_eq!(session.user().unwrap().id, "u1");
}

#[tokio::test]
async fn test_login_not_committed_when_token_cannot_be_stored() {
    let client = Rc::new(ApiClient::new(
        MockHttpClient::new(),
        ClientConfig::default(),
        Rc::new(UnwritableStore),
        Rc::new(RecordingNavigator::default()),
    ));
    client
        .http()
        .mock_response(HttpMethod::Post, &url("/auth/login"), 200, login_success());
    let session = Session::new(client.clone());
    session.restore().await;
    let transitions = record_transitions(&session);

    assert!(!session.login("grace@example.com", "secret").await);

    assert_eq!(client.credentials().token(), None);
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert!(!session.state().is_authenticated());
    assert!(transitions.borrow().is_empty());
}

#[tokio::test]
async fn test_login_failure_leaves_state_unchanged() {
    let fx = Fixture::new();
    fx.http().mock_response(
        HttpMethod::Post,
        &url("/auth/login"),
        401,
        failure("Invalid email or password"),
    );
    let session = Session::new(fx.client.clone());
    session.restore().await;
    let transitions = record_transitions(&session);

    assert!(!session.login("grace@example.com", "wrong").await);

    assert_eq!(fx.credentials.token(), None);
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert!(transitions.borrow().is_empty());
}

#[tokio::test]
async fn test_login_requires_both_token_and_user() {
    let fx = Fixture::new();
    let session = Session::new(fx.client.clone());
    session.restore().await;

    // 缺少 token
    fx.http()
        .mock_response(HttpMethod::Post, &url("/auth/login"), 200, ok(user_json()));
    assert!(!session.login("grace@example.com", "secret").await);
    assert_eq!(fx.credentials.token(), None);

    // 缺少 data
    fx.http().mock_response(
        HttpMethod::Post,
        &url("/auth/login"),
        200,
        json!({ "success": true, "token": TOKEN }),
    );
    assert!(!session.login("grace@example.com", "secret").await);
    assert_eq!(fx.credentials.token(), None);

    // success 为 false
    fx.http().mock_response(
        HttpMethod::Post,
        &url("/auth/login"),
        200,
        json!({ "success": false, "token": TOKEN, "data": user_json() }),
    );
    assert!(!session.login("grace@example.com", "secret").await);
    assert_eq!(fx.credentials.token(), None);
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_register_signs_in() {
    let fx = Fixture::new();
    fx.http().mock_response(
        HttpMethod::Post,
        &url("/auth/register"),
        201,
        login_success(),
    );
    let session = Session::new(fx.client.clone());

    assert!(session.register("Grace Hopper", "grace@example.com", "secret").await);
    assert!(session.state().is_authenticated());
    assert_eq!(fx.credentials.token().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn test_register_conflict() {
    let fx = Fixture::new();
    fx.http().mock_response(
        HttpMethod::Post,
        &url("/auth/register"),
        400,
        failure("User with this email already exists"),
    );
    let session = Session::new(fx.client.clone());
    session.restore().await;

    assert!(!session.register("Grace", "grace@example.com", "secret").await);
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_logout_clears_everything_without_request() {
    let fx = Fixture::new();
    fx.http()
        .mock_response(HttpMethod::Post, &url("/auth/login"), 200, login_success());
    let session = Session::new(fx.client.clone());
    assert!(session.login("grace@example.com", "secret").await);
    let requests_before = fx.http().request_count();

    session.logout();

    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(fx.credentials.token(), None);
    assert_eq!(fx.http().request_count(), requests_before);

    // 重复退出无副作用
    session.logout();
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_repeated_401_transitions_once() {
    let fx = Fixture::logged_in();
    fx.http()
        .mock_response(HttpMethod::Get, &url("/auth/me"), 200, ok(user_json()));
    let session = Session::new(fx.client.clone());
    session.restore().await;
    assert!(session.state().is_authenticated());

    let transitions = record_transitions(&session);
    fx.http().mock_response(
        HttpMethod::Get,
        &url("/applications"),
        401,
        failure("Not authorized"),
    );
    fx.http().mock_response(
        HttpMethod::Get,
        &url("/analytics/dashboard"),
        401,
        failure("Not authorized"),
    );

    let apps = fx.client.applications();
    let analytics = fx.client.analytics();
    let filter = placement_shared::ApplicationFilter::default();
    let (a, b) = futures::join!(apps.list(&filter), analytics.dashboard());
    assert!(a.unwrap_err().is_unauthorized());
    assert!(b.unwrap_err().is_unauthorized());

    assert_eq!(fx.credentials.token(), None);
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(*transitions.borrow(), vec![SessionState::Unauthenticated]);
    assert_eq!(fx.navigator.redirects(), 2);
}

#[tokio::test]
async fn test_update_profile_replaces_user() {
    let fx = Fixture::logged_in();
    fx.http()
        .mock_response(HttpMethod::Get, &url("/auth/me"), 200, ok(user_json()));
    let mut renamed = user_json();
    renamed["name"] = json!("Rear Admiral Hopper");
    fx.http()
        .mock_response(HttpMethod::Put, &url("/auth/profile"), 200, ok(renamed));

    let session = Session::new(fx.client.clone());
    session.restore().await;

    let mut profile = UserProfile::from(&session.user().unwrap());
    profile.name = "Rear Admiral Hopper".into();
    profile.github = Some("ghopper".into());

    let user = session.update_profile(&profile).await.unwrap();
    assert_eq!(user.name, "Rear Admiral Hopper");
    assert_eq!(session.user().unwrap().name, "Rear Admiral Hopper");
}

#[tokio::test]
async fn test_change_password_reports_backend_message() {
    let fx = Fixture::logged_in();
    fx.http().mock_response(
        HttpMethod::Put,
        &url("/auth/password"),
        400,
        failure("Current password is incorrect"),
    );
    let session = Session::new(fx.client.clone());

    let err = session.change_password("wrong", "new-secret").await.unwrap_err();
    assert_eq!(
        err.user_message("Failed to change password"),
        "Current password is incorrect"
    );
}

#[tokio::test]
async fn test_dropping_session_unsubscribes() {
    let fx = Fixture::logged_in();
    {
        let _session = Session::new(fx.client.clone());
    }
    fx.http()
        .mock_response(HttpMethod::Get, &url("/auth/me"), 401, failure("expired"));

    assert!(fx.client.auth().me().await.unwrap_err().is_unauthorized());
    assert_eq!(fx.credentials.token(), None);
}
