//! AI 生成接口的请求 / 响应模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_description: String,
    pub company_name: String,
    pub position_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_experience: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub word_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisRequest {
    pub resume_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub word_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPrepRequest {
    pub company_name: String,
    pub position_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_type: Option<String>,
}

impl Default for InterviewPrepRequest {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            position_title: String::new(),
            interview_type: Some("general".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPrep {
    #[serde(default)]
    pub interview_prep: String,
}

/// `POST /ai/suggestions` 返回
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// `GET /ai/job-recommendations` 查询条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendationQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecommendation {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub remote: Option<bool>,
    pub url: Option<String>,
    pub match_score: Option<f64>,
}

/// 按空白切分的词数（后端未返回词数时使用）
pub fn word_count(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_letter_request_omits_missing_experience() {
        let req = CoverLetterRequest {
            job_description: "Build things".into(),
            company_name: "Acme".into(),
            position_title: "Engineer".into(),
            user_experience: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert!(json.get("userExperience").is_none());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }
}
