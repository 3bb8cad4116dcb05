//! 页面级动作
//!
//! 每个动作自行捕获错误，失败时恰好发出一条通知，
//! 并通过 `Option` / `bool` 告诉页面是否应该提交状态。

use placement_shared::{
    Application, ApplicationFilter, ApplicationForm, CoverLetterRequest, InterviewPrepRequest,
    NoteInput, ResumeAnalysisRequest, UserProfile, word_count,
};

use crate::api::{DashboardSnapshot, SnapshotQuery};
use crate::client::{ApiClient, EnvelopeExt};
use crate::error::ApiError;
use crate::notify::{Notice, Notifier};
use crate::request::HttpClient;
use crate::session::Session;


pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard data";
pub const ANALYTICS_LOAD_FAILED: &str = "Failed to load analytics data";
pub const APPLICATIONS_LOAD_FAILED: &str = "Failed to load applications";
pub const PASSWORD_MISMATCH: &str = "New passwords do not match";

/// 分析页最近动态的条数
pub const ANALYTICS_ACTIVITY_LIMIT: u32 = 10;

/// AI 生成的文本与词数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedContent {
    pub text: String,
    pub word_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

fn report(notifier: &dyn Notifier, action: &str, err: &ApiError, fallback: &str) {
    log::error!("{} failed: {}", action, err);
    notifier.notify(Notice::error(err.user_message(fallback)));
}

// ===== 仪表盘 / 分析 =====

/// 传输或后端错误一律显示通用提示
pub async fn load_dashboard<C: HttpClient>(
    client: &ApiClient<C>,
    notifier: &dyn Notifier,
) -> Option<DashboardSnapshot> {
    match client.analytics().snapshot(SnapshotQuery::default()).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            log::error!("load dashboard failed: {}", e);
            notifier.notify(Notice::error(DASHBOARD_LOAD_FAILED));
            None
        }
    }
}

pub async fn load_analytics<C: HttpClient>(
    client: &ApiClient<C>,
    months: u32,
    notifier: &dyn Notifier,
) -> Option<DashboardSnapshot> {
    let query = SnapshotQuery {
        months: Some(months),
        limit: Some(ANALYTICS_ACTIVITY_LIMIT),
    };
    match client.analytics().snapshot(query).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            log::error!("load analytics failed: {}", e);
            notifier.notify(Notice::error(ANALYTICS_LOAD_FAILED));
            None
        }
    }
}

// ===== 申请 =====

pub async fn load_applications<C: HttpClient>(
    client: &ApiClient<C>,
    filter: &ApplicationFilter,
    notifier: &dyn Notifier,
) -> Option<Vec<Application>> {
    match client
        .applications()
        .list(filter)
        .await
        .and_then(|env| env.into_data())
    {
        Ok(apps) => Some(apps),
        Err(e) => {
            log::error!("load applications failed: {}", e);
            notifier.notify(Notice::error(APPLICATIONS_LOAD_FAILED));
            None
        }
    }
}

/// `editing` 为 `Some(id)` 时更新，否则新建
pub async fn save_application<C: HttpClient>(
    client: &ApiClient<C>,
    editing: Option<&str>,
    form: &ApplicationForm,
    notifier: &dyn Notifier,
) -> Option<Application> {
    let apps = client.applications();
    let result = match editing {
        Some(id) => apps.update(id, form).await,
        None => apps.create(form).await,
    };

    match result.and_then(|env| env.into_data()) {
        Ok(app) => {
            let text = if editing.is_some() {
                "Application updated successfully"
            } else {
                "Application created successfully"
            };
            notifier.notify(Notice::success(text));
            Some(app)
        }
        Err(e) => {
            report(notifier, "save application", &e, "Failed to save application");
            None
        }
    }
}

pub async fn delete_application<C: HttpClient>(
    client: &ApiClient<C>,
    id: &str,
    notifier: &dyn Notifier,
) -> bool {
    match client
        .applications()
        .delete(id)
        .await
        .and_then(|env| env.into_success())
    {
        Ok(()) => {
            notifier.notify(Notice::success("Application deleted successfully"));
            true
        }
        Err(e) => {
            log::error!("delete application {} failed: {}", id, e);
            notifier.notify(Notice::error("Failed to delete application"));
            false
        }
    }
}

pub async fn add_note<C: HttpClient>(
    client: &ApiClient<C>,
    id: &str,
    note: &NoteInput,
    notifier: &dyn Notifier,
) -> Option<Application> {
    match client
        .applications()
        .add_note(id, note)
        .await
        .and_then(|env| env.into_data())
    {
        Ok(app) => {
            notifier.notify(Notice::success("Note added successfully"));
            Some(app)
        }
        Err(e) => {
            report(notifier, "add note", &e, "Failed to add note");
            None
        }
    }
}

// ===== 设置 =====

pub async fn load_profile<C: HttpClient>(
    client: &ApiClient<C>,
    notifier: &dyn Notifier,
) -> Option<UserProfile> {
    match client.auth().profile().await.and_then(|env| env.into_data()) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::error!("load profile failed: {}", e);
            notifier.notify(Notice::error("Failed to load profile"));
            None
        }
    }
}

pub async fn save_profile<C: HttpClient>(
    session: &Session<C>,
    profile: &UserProfile,
    notifier: &dyn Notifier,
) -> bool {
    match session.update_profile(profile).await {
        Ok(_) => {
            notifier.notify(Notice::success("Profile updated successfully"));
            true
        }
        Err(e) => {
            report(notifier, "save profile", &e, "Failed to update profile");
            false
        }
    }
}

/// 两次输入的新密码不一致时不请求后端
pub async fn change_password<C: HttpClient>(
    session: &Session<C>,
    form: &PasswordForm,
    notifier: &dyn Notifier,
) -> bool {
    if form.new != form.confirm {
        notifier.notify(Notice::error(PASSWORD_MISMATCH));
        return false;
    }

    match session.change_password(&form.current, &form.new).await {
        Ok(()) => {
            notifier.notify(Notice::success("Password changed successfully"));
            true
        }
        Err(e) => {
            report(notifier, "change password", &e, "Failed to change password");
            false
        }
    }
}

// ===== AI 工具 =====

pub async fn generate_cover_letter<C: HttpClient>(
    client: &ApiClient<C>,
    req: &CoverLetterRequest,
    notifier: &dyn Notifier,
) -> Option<GeneratedContent> {
    match client
        .ai()
        .cover_letter(req)
        .await
        .and_then(|env| env.into_data())
    {
        Ok(letter) => {
            notifier.notify(Notice::success("Cover letter generated successfully!"));
            Some(GeneratedContent {
                text: letter.cover_letter,
                word_count: letter.word_count,
            })
        }
        Err(e) => {
            report(notifier, "cover letter", &e, "Failed to generate cover letter");
            None
        }
    }
}

pub async fn analyze_resume<C: HttpClient>(
    client: &ApiClient<C>,
    req: &ResumeAnalysisRequest,
    notifier: &dyn Notifier,
) -> Option<GeneratedContent> {
    match client
        .ai()
        .resume_analysis(req)
        .await
        .and_then(|env| env.into_data())
    {
        Ok(analysis) => {
            notifier.notify(Notice::success("Resume analysis completed!"));
            Some(GeneratedContent {
                text: analysis.analysis,
                word_count: analysis.word_count,
            })
        }
        Err(e) => {
            report(notifier, "resume analysis", &e, "Failed to analyze resume");
            None
        }
    }
}

/// 后端不返回词数，按空白切分计算
pub async fn prepare_interview<C: HttpClient>(
    client: &ApiClient<C>,
    req: &InterviewPrepRequest,
    notifier: &dyn Notifier,
) -> Option<GeneratedContent> {
    match client
        .ai()
        .interview_prep(req)
        .await
        .and_then(|env| env.into_data())
    {
        Ok(prep) => {
            notifier.notify(Notice::success("Interview prep materials generated!"));
            let word_count = word_count(&prep.interview_prep);
            Some(GeneratedContent {
                text: prep.interview_prep,
                word_count,
            })
        }
        Err(e) => {
            report(notifier, "interview prep", &e, "Failed to generate interview prep");
            None
        }
    }
}

// ===== 健康检查 =====

pub async fn check_health<C: HttpClient>(client: &ApiClient<C>, notifier: &dyn Notifier) -> bool {
    match client.health().check().await.and_then(|env| env.into_success()) {
        Ok(()) => {
            notifier.notify(Notice::success("Health check passed!"));
            true
        }
        Err(e) => {
            report(notifier, "health check", &e, "Health check failed!");
            false
        }
    }
}
