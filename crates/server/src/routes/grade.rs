use crate::{
    auth::CurrentUser,
    dtos::grade::{CalculatorPage, GradeCategoriesResponse, GradeCategoryQuery, SubmitGradeRequest},
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use database::services::grade::GradeService;

/// Grade calculator page
#[utoipa::path(
    method(get, post),
    path = "/grades/calculator",
    responses(
        (status = 200, description = "Calculator page context", body = CalculatorPage),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Grades"
)]
pub async fn calculator(_user: CurrentUser) -> Json<CalculatorPage> {
    Json(CalculatorPage::default())
}

/// Grade categories of a taken course and its recorded final grade
#[utoipa::path(
    get,
    path = "/get_grade_categories",
    params(GradeCategoryQuery),
    responses(
        (status = 200, description = "Grade categories", body = GradeCategoriesResponse),
        (status = 400, description = "Missing or malformed query parameters"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Enrollment record not found")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Grades"
)]
pub async fn get_grade_categories(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<GradeCategoryQuery>, QueryRejection>,
) -> Result<Json<GradeCategoriesResponse>, ApiError> {
    let Query(query) = query?;

    let book = GradeService::get_grade_categories(
        &state.db,
        user.id,
        query.course_id,
        query.course_taken_id,
    )
    .await?;

    Ok(Json(book.into()))
}

/// Records the final grade of an enrollment record
#[utoipa::path(
    post,
    path = "/submit_grade",
    request_body = SubmitGradeRequest,
    responses(
        (status = 200, description = "Grade stored", content_type = "text/plain", body = String),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Enrollment record not found"),
        (status = 422, description = "Missing or malformed fields")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Grades"
)]
pub async fn submit_grade(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<SubmitGradeRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(request) = payload?;

    GradeService::submit_grade(
        &state.db,
        user.id,
        request.course_taken_id,
        request.grade,
    )
    .await?;

    Ok((StatusCode::OK, "ok"))
}
