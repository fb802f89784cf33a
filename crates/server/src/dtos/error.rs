use models::form::FieldErrors;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Field-level messages for a rejected form
#[derive(Debug, Serialize, ToSchema)]
pub struct FormErrorsResponse {
    pub errors: BTreeMap<String, String>,
}

impl From<FieldErrors> for FormErrorsResponse {
    fn from(errors: FieldErrors) -> Self {
        Self {
            errors: errors.into_inner(),
        }
    }
}
