use crate::{
    auth::CurrentUser,
    dtos::profile::{ProfilePage, ProfileResponse},
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use database::services::{profile::ProfileService, school::SchoolService};
use models::form::ProfileForm;

/// The caller's profile and the school names the form accepts
#[utoipa::path(
    get,
    path = "/user/profile",
    responses(
        (status = 200, description = "Profile page context", body = ProfilePage),
        (status = 401, description = "Unauthorized - invalid or missing JWT")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Profile"
)]
pub async fn profile_page(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ProfilePage>, ApiError> {
    let profile = ProfileService::get_profile(&state.db, user.id).await?;
    let schools = SchoolService::list_schools(&state.db).await?;

    Ok(Json(ProfilePage {
        profile: profile.into(),
        school_choices: schools.into_iter().map(|school| school.name).collect(),
    }))
}

/// Updates the caller's profile
#[utoipa::path(
    post,
    path = "/user/profile",
    request_body = ProfileForm,
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 422, description = "Form rejected", body = crate::dtos::error::FormErrorsResponse)
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Profile"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<ProfileForm>, JsonRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Json(form) = payload?;

    let profile = ProfileService::update_profile(&state.db, user.id, form).await?;

    Ok(Json(profile.into()))
}
