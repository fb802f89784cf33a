use database::{entities::course_grade_categories, services::grade::GradeBook};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GradeCategoryQuery {
    pub course_id: i32,
    /// Enrollment record whose final grade is returned
    pub course_taken_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradeCategoryResponse {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
    pub weight: f64,
    pub score: Option<f64>,
}

impl From<course_grade_categories::Model> for GradeCategoryResponse {
    fn from(category: course_grade_categories::Model) -> Self {
        Self {
            id: category.id,
            course_id: category.course_id,
            name: category.name,
            weight: category.weight,
            score: category.score,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradeCategoriesResponse {
    pub grade_categories: Vec<GradeCategoryResponse>,
    /// Final grade recorded on the enrollment record
    pub grade: Option<f64>,
    /// Weighted average of the scored categories
    pub calculated_grade: Option<f64>,
}

impl From<GradeBook> for GradeCategoriesResponse {
    fn from(book: GradeBook) -> Self {
        let calculated_grade = book.calculated_grade();

        Self {
            grade_categories: book.categories.into_iter().map(Into::into).collect(),
            grade: book.final_grade,
            calculated_grade,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitGradeRequest {
    /// Id of the enrollment record, sent as `course_id` by the calculator page
    #[serde(rename = "course_id", alias = "course_taken_id")]
    pub course_taken_id: i32,
    /// Stored as sent; `null` clears the grade
    pub grade: Option<f64>,
}

/// Template context of the grade calculator page
#[derive(Debug, Serialize, ToSchema)]
pub struct CalculatorPage {
    pub get_my_courses_url: String,
    pub get_grade_categories_url: String,
    pub submit_grade_url: String,
}

impl Default for CalculatorPage {
    fn default() -> Self {
        Self {
            get_my_courses_url: "/get_my_courses".to_string(),
            get_grade_categories_url: "/get_grade_categories".to_string(),
            submit_grade_url: "/submit_grade".to_string(),
        }
    }
}
