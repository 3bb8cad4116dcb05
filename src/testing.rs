//! 测试夹具：Mock 传输层 + 内存凭证 + 记录型 Navigator / Notifier

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::{Value, json};

use crate::client::{ApiClient, Navigator};
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::credentials::MemoryCredentialStore;
use crate::notify::{Notice, Notifier};
use crate::request::MockHttpClient;

pub const TOKEN: &str = "jwt-token-123";

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Cell<usize>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> usize {
        self.redirects.get()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.set(self.redirects.get() + 1);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

pub struct Fixture {
    pub client: Rc<ApiClient<MockHttpClient>>,
    pub credentials: Rc<MemoryCredentialStore>,
    pub navigator: Rc<RecordingNavigator>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_credentials(MemoryCredentialStore::new())
    }

    pub fn logged_in() -> Self {
        Self::with_credentials(MemoryCredentialStore::with_token(TOKEN))
    }

    fn with_credentials(store: MemoryCredentialStore) -> Self {
        let credentials = Rc::new(store);
        let navigator = Rc::new(RecordingNavigator::default());
        let client = Rc::new(ApiClient::new(
            MockHttpClient::new(),
            ClientConfig::default(),
            credentials.clone(),
            navigator.clone(),
        ));
        Self {
            client,
            credentials,
            navigator,
        }
    }

    pub fn http(&self) -> &MockHttpClient {
        self.client.http()
    }
}

/// 完整的请求地址
pub fn url(path: &str) -> String {
    format!("{}{}", DEFAULT_BASE_URL, path)
}

pub fn user_json() -> Value {
    json!({
        "_id": "u1",
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "role": "user",
        "is_active": true,
        "created_at": "2024-01-15T10:00:00+00:00",
        "updated_at": "2024-01-15T10:00:00+00:00"
    })
}

pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn failure(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

pub fn application_json(id: &str, company: &str) -> Value {
    json!({
        "_id": id,
        "company": { "name": company },
        "position": { "title": "Backend Engineer", "type": "full-time", "level": "mid" },
        "status": "applied",
        "priority": "medium",
        "timeline": { "appliedAt": "2024-02-01T00:00:00Z" },
        "notes": [],
        "interviews": []
    })
}
