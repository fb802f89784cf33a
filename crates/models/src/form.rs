use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Field name to message map produced when a form is rejected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`, keeping the first one reported
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }

    /// Returns `value` when nothing was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{joined}")
    }
}

/// Trims a free-text field, mapping blank input to `None`
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn check_length(errors: &mut FieldErrors, field: &str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
        if value.chars().count() > max {
            errors.add(field, format!("must be at most {max} characters"));
        }
    }
}

/// Course fields submitted through the create and edit forms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct CourseForm {
    /// Catalog code, e.g. `CSE 101`
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub units: Option<i32>,
    pub instructor: Option<String>,
}

impl CourseForm {
    pub const MAX_CODE_LEN: usize = 32;
    pub const MAX_TITLE_LEN: usize = 128;
    pub const MAX_UNITS: i32 = 30;

    /// Checks required fields and bounds, returning the normalized form
    pub fn validate(self) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let code = self.code.trim().to_string();
        let title = self.title.trim().to_string();

        if code.is_empty() {
            errors.add("code", "is required");
        }
        if title.is_empty() {
            errors.add("title", "is required");
        }
        check_length(&mut errors, "code", Some(&code), Self::MAX_CODE_LEN);
        check_length(&mut errors, "title", Some(&title), Self::MAX_TITLE_LEN);

        if let Some(units) = self.units {
            if !(0..=Self::MAX_UNITS).contains(&units) {
                errors.add("units", format!("must be between 0 and {}", Self::MAX_UNITS));
            }
        }

        errors.into_result(Self {
            code,
            title,
            description: normalize(self.description),
            units: self.units,
            instructor: normalize(self.instructor),
        })
    }
}

/// Profile fields a user may change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ProfileForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub grad_date: Option<NaiveDate>,
    /// Must name one of the seeded schools
    pub school: Option<String>,
}

impl ProfileForm {
    pub const MAX_NAME_LEN: usize = 128;
    pub const GRAD_YEARS: std::ops::RangeInclusive<i32> = 1900..=2100;

    /// Checks field shapes. Membership of `school` in the seeded set is
    /// checked against storage by the caller.
    pub fn validate(self) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = normalize(self.first_name);
        let last_name = normalize(self.last_name);
        let email = normalize(self.email);
        let school = normalize(self.school);

        check_length(
            &mut errors,
            "first_name",
            first_name.as_deref(),
            Self::MAX_NAME_LEN,
        );
        check_length(
            &mut errors,
            "last_name",
            last_name.as_deref(),
            Self::MAX_NAME_LEN,
        );

        if let Some(email) = email.as_deref() {
            let valid = email
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
            if !valid {
                errors.add("email", "is not a valid email address");
            }
        }

        if let Some(grad_date) = self.grad_date {
            if !Self::GRAD_YEARS.contains(&grad_date.year()) {
                errors.add("grad_date", "is out of range");
            }
        }

        errors.into_result(Self {
            first_name,
            last_name,
            email,
            grad_date: self.grad_date,
            school,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, title: &str) -> CourseForm {
        CourseForm {
            code: code.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn course_form_requires_code_and_title() {
        let errors = CourseForm::default().validate().unwrap_err();
        assert_eq!(errors.get("code"), Some("is required"));
        assert_eq!(errors.get("title"), Some("is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn course_form_missing_fields_deserialize_as_blank() {
        let form: CourseForm = serde_json::from_str(r#"{"title": "Intro"}"#).unwrap();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("code"), Some("is required"));
        assert!(errors.get("title").is_none());
    }

    #[test]
    fn course_form_trims_and_normalizes() {
        let mut form = course("  CSE 101 ", " Intro to Programming ");
        form.description = Some("   ".to_string());
        form.instructor = Some(" Dr. Lee ".to_string());

        let form = form.validate().unwrap();
        assert_eq!(form.code, "CSE 101");
        assert_eq!(form.title, "Intro to Programming");
        assert_eq!(form.description, None);
        assert_eq!(form.instructor.as_deref(), Some("Dr. Lee"));
    }

    #[test]
    fn course_form_bounds() {
        let mut form = course(&"X".repeat(33), "Title");
        form.units = Some(31);

        let errors = form.validate().unwrap_err();
        assert!(errors.get("code").is_some());
        assert!(errors.get("units").is_some());

        let mut form = course("CSE 12", "Title");
        form.units = Some(0);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn profile_form_accepts_empty() {
        assert_eq!(ProfileForm::default().validate(), Ok(ProfileForm::default()));
    }

    #[test]
    fn profile_form_rejects_bad_email() {
        for email in ["nobody", "@example.com", "user@"] {
            let form = ProfileForm {
                email: Some(email.to_string()),
                ..Default::default()
            };
            let errors = form.validate().unwrap_err();
            assert!(errors.get("email").is_some(), "{email} accepted");
        }
    }

    #[test]
    fn profile_form_rejects_far_grad_date() {
        let form = ProfileForm {
            grad_date: NaiveDate::from_ymd_opt(1850, 6, 1),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err().get("grad_date"),
            Some("is out of range")
        );
    }

    #[test]
    fn profile_form_blank_school_is_none() {
        let form = ProfileForm {
            school: Some("  ".to_string()),
            email: Some(" me@example.com ".to_string()),
            ..Default::default()
        };
        let form = form.validate().unwrap();
        assert_eq!(form.school, None);
        assert_eq!(form.email.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("code", "is required");
        errors.add("code", "must be at most 32 characters");
        assert_eq!(errors.get("code"), Some("is required"));
        assert_eq!(errors.to_string(), "code: is required");
    }
}
