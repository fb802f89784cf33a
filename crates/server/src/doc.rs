use crate::routes::{course, enrollment, grade, health, profile, root, school};
use axum::Json;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::index,
        health::health,
        school::list_schools,
        course::create_course_page,
        course::create_course,
        course::edit_course_page,
        course::edit_course,
        course::get_courses,
        enrollment::add_courses,
        enrollment::delete_courses,
        enrollment::get_my_courses,
        grade::calculator,
        grade::get_grade_categories,
        grade::submit_grade,
        profile::profile_page,
        profile::update_profile
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Pages", description = "Page contexts"),
        (name = "Courses", description = "Course catalog endpoints"),
        (name = "Enrollment", description = "Courses taken by the signed-in user"),
        (name = "Grades", description = "Grade tracking endpoints"),
        (name = "Profile", description = "User profile endpoints"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Course Planner API",
        version = "1.0.0",
        description = "Course planning and grade tracking API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
