use crate::{
    auth::CurrentUser,
    dtos::course::{CourseFormPage, CoursesOverview, EditCourseParams},
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
    response::{IntoResponse, Redirect, Response},
};
use database::{
    error::ServiceError,
    services::{course::CourseService, enrollment::EnrollmentService},
};
use log::debug;
use models::form::{CourseForm, FieldErrors};

/// Empty course form
#[utoipa::path(
    get,
    path = "/course/create",
    responses(
        (status = 200, description = "Course form context", body = CourseFormPage)
    ),
    tag = "Courses"
)]
pub async fn create_course_page() -> Json<CourseFormPage> {
    Json(CourseFormPage::new(
        None,
        CourseForm::default(),
        FieldErrors::new(),
    ))
}

/// Creates a course and redirects to the index page
#[utoipa::path(
    post,
    path = "/course/create",
    request_body = CourseForm,
    responses(
        (status = 303, description = "Course created, redirect to the index page"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 422, description = "Form rejected", body = CourseFormPage)
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<CourseForm>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(form) = payload?;
    debug!("Course form submitted by {}", user.subject);
    save_and_redirect(&state, None, form).await
}

/// Course form pre-filled with an existing course
#[utoipa::path(
    get,
    path = "/course/edit",
    params(EditCourseParams),
    responses(
        (status = 200, description = "Course form context", body = CourseFormPage),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Course not found")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn edit_course_page(
    State(state): State<AppState>,
    _user: CurrentUser,
    params: Result<Query<EditCourseParams>, QueryRejection>,
) -> Result<Json<CourseFormPage>, ApiError> {
    let Query(params) = params?;

    let course = CourseService::get_course(&state.db, params.id)
        .await?
        .ok_or(ServiceError::not_found("course", params.id))?;

    Ok(Json(CourseFormPage::prefilled(course)))
}

/// Updates a course and redirects to the index page
#[utoipa::path(
    post,
    path = "/course/edit",
    params(EditCourseParams),
    request_body = CourseForm,
    responses(
        (status = 303, description = "Course updated, redirect to the index page"),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 404, description = "Course not found"),
        (status = 422, description = "Form rejected", body = CourseFormPage)
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn edit_course(
    State(state): State<AppState>,
    user: CurrentUser,
    params: Result<Query<EditCourseParams>, QueryRejection>,
    payload: Result<Json<CourseForm>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let Json(form) = payload?;
    debug!("Edit of course {} submitted by {}", params.id, user.subject);
    save_and_redirect(&state, Some(params.id), form).await
}

/// Every course plus the caller's enrollment records
#[utoipa::path(
    get,
    path = "/get_courses",
    responses(
        (status = 200, description = "Courses and enrollment records", body = CoursesOverview),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<CoursesOverview>, ApiError> {
    let courses = CourseService::list_courses(&state.db).await?;
    let courses_taken = EnrollmentService::courses_taken(&state.db, user.id).await?;

    Ok(Json(CoursesOverview {
        id: user.id,
        courses: courses.into_iter().map(Into::into).collect(),
        courses_taken: courses_taken.into_iter().map(Into::into).collect(),
    }))
}

/// Saves the form, redisplaying it with inline errors when rejected
async fn save_and_redirect(
    state: &AppState,
    course_id: Option<i32>,
    form: CourseForm,
) -> Result<Response, ApiError> {
    match CourseService::save_course(&state.db, course_id, form.clone()).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(ServiceError::Validation(errors)) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(CourseFormPage::new(course_id, form, errors)),
        )
            .into_response()),
        Err(err) => Err(err.into()),
    }
}
