//! 申请表单状态
//!
//! 把编辑对话框的字段整合为 `FormState`，负责回填、重置和转换为 `ApplicationForm`。

use leptos::prelude::*;
use placement_shared::{
    ApplicationDetails, ApplicationForm, ApplicationStatus, Company, Location, Position, Priority,
    Salary,
};

fn opt(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

#[derive(Clone, Copy)]
pub struct FormState {
    pub company_name: RwSignal<String>,
    pub company_website: RwSignal<String>,
    pub city: RwSignal<String>,
    pub region: RwSignal<String>,
    pub country: RwSignal<String>,

    pub position_title: RwSignal<String>,
    pub position_type: RwSignal<String>,
    pub position_level: RwSignal<String>,

    pub status: RwSignal<ApplicationStatus>,
    pub priority: RwSignal<Priority>,

    pub salary_min: RwSignal<u64>,
    pub salary_max: RwSignal<u64>,
    pub currency: RwSignal<String>,

    pub job_posting_url: RwSignal<String>,
    pub cover_letter: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        let state = Self {
            company_name: RwSignal::new(String::new()),
            company_website: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            region: RwSignal::new(String::new()),
            country: RwSignal::new(String::new()),
            position_title: RwSignal::new(String::new()),
            position_type: RwSignal::new(String::new()),
            position_level: RwSignal::new(String::new()),
            status: RwSignal::new(ApplicationStatus::default()),
            priority: RwSignal::new(Priority::default()),
            salary_min: RwSignal::new(0),
            salary_max: RwSignal::new(0),
            currency: RwSignal::new(String::new()),
            job_posting_url: RwSignal::new(String::new()),
            cover_letter: RwSignal::new(String::new()),
        };
        state.reset();
        state
    }

    /// 新建时的默认值
    pub fn reset(&self) {
        self.load(&ApplicationForm::default());
    }

    /// 用已有表单回填
    pub fn load(&self, form: &ApplicationForm) {
        let location = form.company.location.clone().unwrap_or_default();
        self.company_name.set(form.company.name.clone());
        self.company_website
            .set(form.company.website.clone().unwrap_or_default());
        self.city.set(location.city);
        self.region.set(location.state);
        self.country.set(location.country);

        self.position_title.set(form.position.title.clone());
        self.position_type.set(form.position.kind.clone());
        self.position_level
            .set(form.position.level.clone().unwrap_or_default());

        self.status.set(form.status);
        self.priority.set(form.priority);

        self.salary_min.set(form.salary.min);
        self.salary_max.set(form.salary.max);
        self.currency.set(form.salary.currency.clone());

        self.job_posting_url
            .set(form.application_details.job_posting_url.clone());
        self.cover_letter
            .set(form.application_details.cover_letter.clone());
    }

    pub fn to_form(&self) -> ApplicationForm {
        let location = Location {
            city: self.city.get().trim().to_string(),
            state: self.region.get().trim().to_string(),
            country: self.country.get().trim().to_string(),
        };

        ApplicationForm {
            company: Company {
                name: self.company_name.get().trim().to_string(),
                website: opt(self.company_website.get()),
                location: (!location.is_empty()).then_some(location),
            },
            position: Position {
                title: self.position_title.get().trim().to_string(),
                kind: self.position_type.get(),
                level: opt(self.position_level.get()),
            },
            status: self.status.get(),
            priority: self.priority.get(),
            salary: Salary {
                min: self.salary_min.get(),
                max: self.salary_max.get(),
                currency: self.currency.get(),
            },
            application_details: ApplicationDetails {
                job_posting_url: self.job_posting_url.get().trim().to_string(),
                cover_letter: self.cover_letter.get(),
            },
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
