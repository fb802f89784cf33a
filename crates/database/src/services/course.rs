use crate::{entities::courses, error::ServiceError};
use chrono::Utc;
use log::info;
use models::form::CourseForm;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct CourseService;

impl CourseService {
    /// Every course in the catalog, unfiltered
    pub async fn list_courses(db: &DatabaseConnection) -> Result<Vec<courses::Model>, DbErr> {
        courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await
    }

    pub async fn get_course(
        db: &DatabaseConnection,
        course_id: i32,
    ) -> Result<Option<courses::Model>, DbErr> {
        courses::Entity::find_by_id(course_id).one(db).await
    }

    /// Validates `form` and inserts a new course, or updates `course_id` when given
    pub async fn save_course(
        db: &DatabaseConnection,
        course_id: Option<i32>,
        form: CourseForm,
    ) -> Result<courses::Model, ServiceError> {
        let form = form.validate()?;
        let now = Utc::now().naive_utc();

        let course = match course_id {
            Some(id) => {
                let existing = courses::Entity::find_by_id(id)
                    .one(db)
                    .await?
                    .ok_or(ServiceError::not_found("course", id))?;

                let mut course: courses::ActiveModel = existing.into();
                course.code = Set(form.code);
                course.title = Set(form.title);
                course.description = Set(form.description);
                course.units = Set(form.units);
                course.instructor = Set(form.instructor);
                course.updated_at = Set(now);

                let course = course.update(db).await?;
                info!("Updated course {} ({})", course.id, course.code);
                course
            }
            None => {
                let course = courses::ActiveModel {
                    code: Set(form.code),
                    title: Set(form.title),
                    description: Set(form.description),
                    units: Set(form.units),
                    instructor: Set(form.instructor),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(db)
                .await?;

                info!("Created course {} ({})", course.id, course.code);
                course
            }
        };

        Ok(course)
    }
}
