use crate::{
    auth::CurrentUser,
    dtos::enrollment::{AddCoursesRequest, DeleteCoursesRequest, MyCoursesResponse},
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use database::services::enrollment::EnrollmentService;

/// Enrolls the caller in the selected courses
#[utoipa::path(
    post,
    path = "/add_courses",
    request_body = AddCoursesRequest,
    responses(
        (status = 200, description = "Courses added", content_type = "text/plain", body = String),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Course is already taken", content_type = "text/plain", body = String),
        (status = 422, description = "Missing or malformed `courses_selected`")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Enrollment"
)]
pub async fn add_courses(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<AddCoursesRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(request) = payload?;

    EnrollmentService::add_courses(&state.db, user.id, &request.courses_selected).await?;

    Ok((StatusCode::OK, "ok"))
}

/// Removes the caller's records for the listed courses
#[utoipa::path(
    post,
    path = "/delete_courses",
    request_body = DeleteCoursesRequest,
    responses(
        (status = 200, description = "Courses removed", content_type = "text/plain", body = String),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 422, description = "Missing or malformed `courses_delete`")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Enrollment"
)]
pub async fn delete_courses(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<DeleteCoursesRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(request) = payload?;

    EnrollmentService::remove_courses(&state.db, user.id, &request.courses_delete).await?;

    Ok((StatusCode::OK, "ok"))
}

/// The caller's enrollment records joined with their courses
#[utoipa::path(
    get,
    path = "/get_my_courses",
    responses(
        (status = 200, description = "Enrolled courses", body = MyCoursesResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Enrollment"
)]
pub async fn get_my_courses(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<MyCoursesResponse>, ApiError> {
    let rows = EnrollmentService::my_courses(&state.db, user.id).await?;

    Ok(Json(MyCoursesResponse {
        courses_taken: rows.into_iter().map(Into::into).collect(),
    }))
}
