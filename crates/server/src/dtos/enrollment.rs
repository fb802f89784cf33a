use database::entities::{courses, courses_taken};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseTakenResponse {
    pub id: i32,
    pub course_id: i32,
    pub user_id: i32,
    pub is_enrolled: bool,
    pub final_grade: Option<f64>,
}

impl From<courses_taken::Model> for CourseTakenResponse {
    fn from(taken: courses_taken::Model) -> Self {
        Self {
            id: taken.id,
            course_id: taken.course_id,
            user_id: taken.user_id,
            is_enrolled: taken.is_enrolled,
            final_grade: taken.final_grade,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCoursesRequest {
    pub courses_selected: Vec<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteCoursesRequest {
    pub courses_delete: Vec<i32>,
}

/// An enrollment record flattened together with its course
#[derive(Debug, Serialize, ToSchema)]
pub struct MyCourseResponse {
    /// Id of the enrollment record
    pub id: i32,
    pub course_id: i32,
    pub user_id: i32,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub units: Option<i32>,
    pub instructor: Option<String>,
    pub is_enrolled: bool,
    pub final_grade: Option<f64>,
}

impl From<(courses_taken::Model, courses::Model)> for MyCourseResponse {
    fn from((taken, course): (courses_taken::Model, courses::Model)) -> Self {
        Self {
            id: taken.id,
            course_id: course.id,
            user_id: taken.user_id,
            code: course.code,
            title: course.title,
            description: course.description,
            units: course.units,
            instructor: course.instructor,
            is_enrolled: taken.is_enrolled,
            final_grade: taken.final_grade,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MyCoursesResponse {
    pub courses_taken: Vec<MyCourseResponse>,
}
