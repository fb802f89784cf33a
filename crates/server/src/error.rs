use crate::dtos::error::{ErrorResponse, FormErrorsResponse};
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use log::error;
use sea_orm::DbErr;

/// Body returned when the user already holds a record for a course
pub const ALREADY_TAKEN_MESSAGE: &str = "Course is already taken";

/// Errors a handler can answer with
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    Unauthorized,
    /// The request body or query string could not be read
    Rejected { status: StatusCode, message: String },
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::Service(ServiceError::Db(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Service(ServiceError::Validation(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(FormErrorsResponse::from(errors)),
            )
                .into_response(),
            Self::Service(ServiceError::AlreadyEnrolled { .. }) => {
                (StatusCode::CONFLICT, ALREADY_TAKEN_MESSAGE).into_response()
            }
            Self::Service(err @ ServiceError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(err.to_string())),
            )
                .into_response(),
            Self::Service(ServiceError::Db(err)) => {
                error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("Authentication required")),
            )
                .into_response(),
            Self::Rejected { status, message } => {
                (status, Json(ErrorResponse::new(message))).into_response()
            }
        }
    }
}
