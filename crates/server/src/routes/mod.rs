use crate::{doc, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod health;
pub mod profile;
pub mod root;
pub mod school;

/// Routes served without authentication
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::index))
        .route("/course/create", get(course::create_course_page))
        .route("/schools", get(school::list_schools))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(doc::openapi_json))
}

/// Routes that need a signed-in user
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/course/create", post(course::create_course))
        .route(
            "/course/edit",
            get(course::edit_course_page).post(course::edit_course),
        )
        .route("/get_courses", get(course::get_courses))
        .route(
            "/user/profile",
            get(profile::profile_page).post(profile::update_profile),
        )
        .route("/add_courses", post(enrollment::add_courses))
        .route("/delete_courses", post(enrollment::delete_courses))
        .route(
            "/grades/calculator",
            get(grade::calculator).post(grade::calculator),
        )
        .route("/get_my_courses", get(enrollment::get_my_courses))
        .route("/get_grade_categories", get(grade::get_grade_categories))
        .route("/submit_grade", post(grade::submit_grade))
}
