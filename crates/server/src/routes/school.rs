use crate::{dtos::school::SchoolResponse, error::ApiError, state::AppState};
use axum::{Json, extract::State};
use database::services::school::SchoolService;

/// Seeded schools, ordered by name
#[utoipa::path(
    get,
    path = "/schools",
    responses(
        (status = 200, description = "Schools", body = Vec<SchoolResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profile"
)]
pub async fn list_schools(
    State(state): State<AppState>,
) -> Result<Json<Vec<SchoolResponse>>, ApiError> {
    let schools = SchoolService::list_schools(&state.db).await?;

    Ok(Json(schools.into_iter().map(Into::into).collect()))
}
