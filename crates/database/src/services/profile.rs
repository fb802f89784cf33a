use crate::{entities::users, error::ServiceError, services::school::SchoolService};
use chrono::Utc;
use log::info;
use models::form::{FieldErrors, ProfileForm};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};

pub struct ProfileService;

impl ProfileService {
    /// Resolves an authenticated subject to its user row, creating it on first sight
    pub async fn find_or_create_by_subject(
        db: &DatabaseConnection,
        subject: &str,
    ) -> Result<users::Model, DbErr> {
        if let Some(user) = Self::find_by_subject(db, subject).await? {
            return Ok(user);
        }

        Self::register_subject(db, subject).await
    }

    /// Inserts a user for `subject`, falling back to the existing row when the insert conflicts
    async fn register_subject(
        db: &DatabaseConnection,
        subject: &str,
    ) -> Result<users::Model, DbErr> {
        let inserted = users::ActiveModel {
            subject: Set(subject.to_string()),
            username: Set(subject.to_string()),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await;

        match inserted {
            Ok(user) => {
                info!("Registered user {} for subject {subject}", user.id);
                Ok(user)
            }
            // Another request registered the same subject first
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Self::find_by_subject(db, subject)
                    .await?
                    .ok_or(err)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn get_profile(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<users::Model, ServiceError> {
        users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or(ServiceError::not_found("user", user_id))
    }

    /// Validates and stores the profile fields; `school` must name a seeded school
    pub async fn update_profile(
        db: &DatabaseConnection,
        user_id: i32,
        form: ProfileForm,
    ) -> Result<users::Model, ServiceError> {
        let form = form.validate()?;

        if let Some(school) = form.school.as_deref() {
            if !SchoolService::school_exists(db, school).await? {
                let mut errors = FieldErrors::new();
                errors.add("school", "is not a known school");
                return Err(errors.into());
            }
        }

        let user = Self::get_profile(db, user_id).await?;
        let mut user: users::ActiveModel = user.into();
        user.first_name = Set(form.first_name);
        user.last_name = Set(form.last_name);
        user.email = Set(form.email);
        user.grad_date = Set(form.grad_date);
        user.school = Set(form.school);

        let user = user.update(db).await?;
        info!("Updated profile of user {user_id}");
        Ok(user)
    }

    async fn find_by_subject(
        db: &DatabaseConnection,
        subject: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Subject.eq(subject))
            .one(db)
            .await
    }
}
