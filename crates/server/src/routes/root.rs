use crate::{
    dtos::course::{CourseResponse, IndexPage},
    error::ApiError,
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::course::CourseService;

/// Index page: the full course catalog and the endpoints the page calls
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Index page context", body = IndexPage),
        (status = 500, description = "Internal server error")
    ),
    tag = "Pages"
)]
pub async fn index(State(state): State<AppState>) -> Result<Json<IndexPage>, ApiError> {
    let courses = CourseService::list_courses(&state.db).await?;

    Ok(Json(IndexPage {
        courses: courses.into_iter().map(CourseResponse::from).collect(),
        add_course_url: "/add_courses".to_string(),
        delete_course_url: "/delete_courses".to_string(),
        edit_course_url: "/course/edit".to_string(),
        create_course_url: "/course/create".to_string(),
    }))
}
