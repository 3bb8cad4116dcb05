use std::cell::RefCell;
use std::rc::Rc;

use placement_shared::protocol::{ChangePasswordRequest, HttpMethod};
use placement_shared::{
    ApplicationFilter, ApplicationForm, ApplicationStatus, CoverLetterRequest,
    InterviewInput, InterviewPrepRequest, JobRecommendationQuery, NoteInput,
    ResumeAnalysisRequest,
};
use serde_json::{Value, json};

use super::SnapshotQuery;
use crate::client::EnvelopeExt;
use crate::error::ApiError;
use crate::request::MockReply;
use crate::testing::{Fixture, application_json, failure, ok, url};

fn mock_analytics(fx: &Fixture, trends: &str, recent: &str) {
    let http = fx.http();
    http.mock_response(
        HttpMethod::Get,
        &url("/analytics/dashboard"),
        200,
        ok(json!({
            "totalApplications": 12,
            "activeApplications": 7,
            "interviewsScheduled": 3,
            "offersReceived": 1,
            "acceptanceRate": 8.3,
            "averageResponseTime": 6.5
        })),
    );
    http.mock_response(
        HttpMethod::Get,
        &url(trends),
        200,
        ok(json!([{ "month": "2024-01", "applications": 5, "interviews": 2, "offers": 0 }])),
    );
    http.mock_response(
        HttpMethod::Get,
        &url("/analytics/status-distribution"),
        200,
        ok(json!([{ "status": "applied", "count": 5, "percentage": 41.7 }])),
    );
    http.mock_response(
        HttpMethod::Get,
        &url("/analytics/goals"),
        200,
        ok(json!([{ "month": "2024-01", "target": 10, "achieved": 5, "percentage": 50.0 }])),
    );
    http.mock_response(
        HttpMethod::Get,
        &url(recent),
        200,
        ok(json!([application_json("a1", "Acme")])),
    );
}

#[tokio::test]
async fn test_snapshot_collects_all_five() {
    let fx = Fixture::logged_in();
    mock_analytics(
        &fx,
        "/analytics/trends?months=6",
        "/analytics/recent-activity?limit=10",
    );

    let snapshot = fx
        .client
        .analytics()
        .snapshot(SnapshotQuery {
            months: Some(6),
            limit: Some(10),
        })
        .await
        .unwrap();

    assert_eq!(snapshot.stats.total_applications, 12);
    assert_eq!(snapshot.trends.len(), 1);
    assert_eq!(snapshot.distribution[0].count, 5);
    assert_eq!(snapshot.goals[0].target, 10);
    assert_eq!(snapshot.recent[0].company.name, "Acme");
    assert_eq!(fx.http().request_count(), 5);
}

#[tokio::test]
async fn test_snapshot_fails_when_one_request_fails() {
    let fx = Fixture::logged_in();
    mock_analytics(&fx, "/analytics/trends", "/analytics/recent-activity");
    fx.http().mock_response(
        HttpMethod::Get,
        &url("/analytics/goals"),
        500,
        failure("Server Error"),
    );

    let err = fx
        .client
        .analytics()
        .snapshot(SnapshotQuery::default())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 500,
            message: "Server Error".into()
        }
    );
}

#[tokio::test]
async fn test_snapshot_fails_on_unsuccessful_envelope() {
    let fx = Fixture::logged_in();
    mock_analytics(&fx, "/analytics/trends", "/analytics/recent-activity");
    fx.http().mock_response(
        HttpMethod::Get,
        &url("/analytics/status-distribution"),
        200,
        failure("No data"),
    );

    let err = fx
        .client
        .analytics()
        .snapshot(SnapshotQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unsuccessful { .. }));
}

/// 用内存列表模拟后端：POST 追加，GET 返回全部
fn install_fake_backend(fx: &Fixture) -> Rc<RefCell<Vec<Value>>> {
    let store: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(Vec::new()));
    let records = store.clone();
    let list_url = url("/applications");

    fx.http().set_handler(move |req| {
        if req.url != list_url {
            return None;
        }
        match req.method {
            HttpMethod::Post => {
                let mut body: Value = serde_json::from_str(req.body.as_deref()?).ok()?;
                let id = format!("app-{}", records.borrow().len() + 1);
                body["_id"] = json!(id);
                records.borrow_mut().push(body.clone());
                Some(MockReply::Response(201, ok(body).to_string()))
            }
            HttpMethod::Get => Some(MockReply::Response(
                200,
                ok(Value::Array(records.borrow().clone())).to_string(),
            )),
            _ => None,
        }
    });
    store
}

#[tokio::test]
async fn test_created_application_appears_in_list() {
    let fx = Fixture::logged_in();
    let store = install_fake_backend(&fx);

    let mut form = ApplicationForm::default();
    form.company.name = "Initech".into();
    form.position.title = "Platform Engineer".into();

    let created = fx
        .client
        .applications()
        .create(&form)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(created.id, "app-1");
    assert_eq!(created.status, ApplicationStatus::Applied);

    let listed = fx
        .client
        .applications()
        .list(&ApplicationFilter::default())
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].company.name, "Initech");
    assert_eq!(listed[0].position.title, "Platform Engineer");
    assert_eq!(listed[0].position.kind, "full-time");
    assert_eq!(store.borrow().len(), 1);
}

#[tokio::test]
async fn test_application_endpoints() {
    let fx = Fixture::logged_in();
    let http = fx.http();
    http.mock_response(
        HttpMethod::Get,
        &url("/applications/a1"),
        200,
        ok(application_json("a1", "Acme")),
    );
    http.mock_response(
        HttpMethod::Put,
        &url("/applications/a1"),
        200,
        ok(application_json("a1", "Acme Corp")),
    );
    http.mock_response(
        HttpMethod::Post,
        &url("/applications/a1/notes"),
        200,
        ok(application_json("a1", "Acme")),
    );
    http.mock_response(
        HttpMethod::Post,
        &url("/applications/a1/interviews"),
        200,
        ok(application_json("a1", "Acme")),
    );
    http.mock_response(
        HttpMethod::Get,
        &url("/applications/stats"),
        200,
        ok(json!({ "total": 4, "byStatus": { "applied": 3, "offer": 1 } })),
    );

    let apps = fx.client.applications();

    let app = apps.get("a1").await.unwrap().into_data().unwrap();
    assert_eq!(app.company.name, "Acme");

    let mut form = ApplicationForm::from(&app);
    form.company.name = "Acme Corp".into();
    let updated = apps.update("a1", &form).await.unwrap().into_data().unwrap();
    assert_eq!(updated.company.name, "Acme Corp");
    let sent: Value = serde_json::from_str(http.last_request().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(sent["company"]["name"], "Acme Corp");
    assert!(sent.get("id").is_none());

    let note = NoteInput {
        content: "Recruiter called".into(),
        kind: None,
    };
    apps.add_note("a1", &note).await.unwrap().into_data().unwrap();
    let sent: Value = serde_json::from_str(http.last_request().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, json!({ "content": "Recruiter called" }));

    let interview = InterviewInput {
        kind: Some("technical".into()),
        interviewer: Some("Dana".into()),
        ..Default::default()
    };
    apps.add_interview("a1", &interview).await.unwrap().into_data().unwrap();
    let sent: Value = serde_json::from_str(http.last_request().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, json!({ "type": "technical", "interviewer": "Dana" }));

    let stats = apps.stats().await.unwrap().into_data().unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.by_status.get("offer"), Some(&1));
}

#[tokio::test]
async fn test_auth_endpoints() {
    let fx = Fixture::logged_in();
    fx.http().mock_response(
        HttpMethod::Put,
        &url("/auth/password"),
        200,
        json!({ "success": true, "message": "Password updated" }),
    );

    let req = ChangePasswordRequest {
        current_password: "old".into(),
        new_password: "new-secret".into(),
    };
    fx.client
        .auth()
        .change_password(&req)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    let sent = fx.http().last_request().unwrap();
    assert_eq!(sent.method, HttpMethod::Put);
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({ "currentPassword": "old", "newPassword": "new-secret" })
    );
}

#[tokio::test]
async fn test_ai_endpoints() {
    let fx = Fixture::logged_in();
    let http = fx.http();
    http.mock_response(
        HttpMethod::Post,
        &url("/ai/cover-letter"),
        200,
        ok(json!({ "coverLetter": "Dear Hiring Manager", "wordCount": 3 })),
    );
    http.mock_response(
        HttpMethod::Post,
        &url("/ai/resume-analysis"),
        200,
        ok(json!({ "analysis": "Strong", "wordCount": 1 })),
    );
    http.mock_response(
        HttpMethod::Post,
        &url("/ai/interview-prep"),
        200,
        ok(json!({ "interviewPrep": "Practice system design" })),
    );
    http.mock_response(
        HttpMethod::Post,
        &url("/ai/suggestions"),
        200,
        ok(json!({ "suggestions": ["Follow up with Acme"] })),
    );
    http.mock_response(
        HttpMethod::Get,
        &url("/ai/job-recommendations?location=Berlin&remote=true"),
        200,
        ok(json!([{ "title": "Rust Engineer", "company": "Ferrous" }])),
    );

    let ai = fx.client.ai();

    let letter = ai
        .cover_letter(&CoverLetterRequest {
            job_description: "Build APIs".into(),
            company_name: "Acme".into(),
            position_title: "Engineer".into(),
            user_experience: None,
        })
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(letter.word_count, 3);

    let analysis = ai
        .resume_analysis(&ResumeAnalysisRequest {
            resume_content: "Rust, Go".into(),
            job_description: None,
        })
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(analysis.analysis, "Strong");

    let prep = ai
        .interview_prep(&InterviewPrepRequest {
            company_name: "Acme".into(),
            position_title: "Engineer".into(),
            interview_type: Some("technical".into()),
        })
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(prep.interview_prep, "Practice system design");

    let suggestions = ai.suggestions().await.unwrap().into_data().unwrap();
    assert_eq!(suggestions.suggestions.len(), 1);
    assert!(http.last_request().unwrap().body.is_none());

    let jobs = ai
        .job_recommendations(&JobRecommendationQuery {
            location: Some("Berlin".into()),
            remote: Some("true".into()),
            experience: None,
        })
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(jobs[0].company, "Ferrous");
}

#[tokio::test]
async fn test_health_check() {
    let fx = Fixture::new();
    fx.http().mock_response(
        HttpMethod::Get,
        &url("/health"),
        200,
        json!({ "success": true, "message": "API is running", "timestamp": "2024-01-15T10:00:00Z" }),
    );
    fx.client
        .health()
        .check()
        .await
        .unwrap()
        .into_success()
        .unwrap();
}
