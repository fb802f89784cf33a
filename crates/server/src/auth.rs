use crate::{error::ApiError, state::AppState};
use axum::{
    Extension,
    extract::{FromRequestParts, Request},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use database::services::profile::ProfileService;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Identity of the caller as asserted by a validated token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject(pub String);

/// Copies the token's subject claim into the request as a [`Subject`]
pub async fn attach_subject(
    claims: Extension<DefaultClaims>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let sub = claims.sub.as_ref().ok_or(StatusCode::UNAUTHORIZED)?;
    request.extensions_mut().insert(Subject(sub.to_string()));

    Ok(next.run(request).await)
}

/// The signed-in user, resolved to a local user row
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub subject: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Subject(subject) = parts
            .extensions
            .get::<Subject>()
            .cloned()
            .ok_or(ApiError::Unauthorized)?;

        let user = ProfileService::find_or_create_by_subject(&state.db, &subject).await?;

        Ok(Self {
            id: user.id,
            subject,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    async fn state() -> AppState {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);

        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        AppState::new(db)
    }

    fn parts(subject: Option<&str>) -> Parts {
        let mut request = HttpRequest::builder().uri("/").body(()).unwrap();
        if let Some(subject) = subject {
            request.extensions_mut().insert(Subject(subject.to_string()));
        }
        request.into_parts().0
    }

    #[tokio::test]
    async fn current_user_carries_subject() {
        let state = state().await;

        let first = CurrentUser::from_request_parts(&mut parts(Some("auth0|alice")), &state)
            .await
            .unwrap();
        let again = CurrentUser::from_request_parts(&mut parts(Some("auth0|alice")), &state)
            .await
            .unwrap();

        assert_eq!(first.subject, "auth0|alice");
        assert_eq!(first.id, again.id);
    }

    #[tokio::test]
    async fn missing_subject_is_unauthorized() {
        let state = state().await;

        let err = CurrentUser::from_request_parts(&mut parts(None), &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }
}
