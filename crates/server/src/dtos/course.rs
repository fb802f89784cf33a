use super::enrollment::CourseTakenResponse;
use chrono::NaiveDateTime;
use database::entities::courses;
use models::form::{CourseForm, FieldErrors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: i32,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub units: Option<i32>,
    pub instructor: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            code: course.code,
            title: course.title,
            description: course.description,
            units: course.units,
            instructor: course.instructor,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

/// Template context of the index page
#[derive(Debug, Serialize, ToSchema)]
pub struct IndexPage {
    pub courses: Vec<CourseResponse>,
    pub add_course_url: String,
    pub delete_course_url: String,
    pub edit_course_url: String,
    pub create_course_url: String,
}

/// Template context of the course create and edit pages
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseFormPage {
    /// Course being edited, absent when creating
    pub course_id: Option<i32>,
    pub action_url: String,
    pub form: CourseForm,
    pub errors: BTreeMap<String, String>,
}

impl CourseFormPage {
    pub fn new(course_id: Option<i32>, form: CourseForm, errors: FieldErrors) -> Self {
        let action_url = match course_id {
            Some(id) => format!("/course/edit?id={id}"),
            None => "/course/create".to_string(),
        };

        Self {
            course_id,
            action_url,
            form,
            errors: errors.into_inner(),
        }
    }

    pub fn prefilled(course: courses::Model) -> Self {
        let form = CourseForm {
            code: course.code,
            title: course.title,
            description: course.description,
            units: course.units,
            instructor: course.instructor,
        };
        Self::new(Some(course.id), form, FieldErrors::new())
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct EditCourseParams {
    /// Course to edit
    pub id: i32,
}

/// The catalog together with the caller's enrollment records
#[derive(Debug, Serialize, ToSchema)]
pub struct CoursesOverview {
    /// The caller's user id
    pub id: i32,
    pub courses: Vec<CourseResponse>,
    pub courses_taken: Vec<CourseTakenResponse>,
}
