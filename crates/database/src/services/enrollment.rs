use crate::{
    entities::{courses, courses_taken},
    error::ServiceError,
};
use log::{info, warn};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

pub struct EnrollmentService;

impl EnrollmentService {
    /// Enrolls the user in each course, in the order given.
    ///
    /// Stops at the first course the user already has a record for and
    /// reports [`ServiceError::AlreadyEnrolled`]. Courses enrolled before that
    /// point stay enrolled.
    pub async fn add_courses(
        db: &DatabaseConnection,
        user_id: i32,
        course_ids: &[i32],
    ) -> Result<Vec<courses_taken::Model>, ServiceError> {
        let mut added = Vec::with_capacity(course_ids.len());

        for &course_id in course_ids {
            if courses::Entity::find_by_id(course_id).one(db).await?.is_none() {
                return Err(ServiceError::not_found("course", course_id));
            }

            let existing = courses_taken::Entity::find()
                .filter(courses_taken::Column::UserId.eq(user_id))
                .filter(courses_taken::Column::CourseId.eq(course_id))
                .count(db)
                .await?;

            if existing > 0 {
                warn!("User {user_id} already has course {course_id}");
                return Err(ServiceError::AlreadyEnrolled { course_id });
            }

            let taken = courses_taken::ActiveModel {
                course_id: Set(course_id),
                user_id: Set(user_id),
                is_enrolled: Set(true),
                final_grade: Set(None),
                ..Default::default()
            }
            .insert(db)
            .await
            .map_err(|err| Self::map_duplicate(err, course_id))?;

            info!("User {user_id} enrolled in course {course_id}");
            added.push(taken);
        }

        Ok(added)
    }

    /// Deletes the user's records for the given courses; unknown ids are ignored
    pub async fn remove_courses(
        db: &DatabaseConnection,
        user_id: i32,
        course_ids: &[i32],
    ) -> Result<u64, DbErr> {
        if course_ids.is_empty() {
            return Ok(0);
        }

        let result = courses_taken::Entity::delete_many()
            .filter(courses_taken::Column::UserId.eq(user_id))
            .filter(courses_taken::Column::CourseId.is_in(course_ids.iter().copied()))
            .exec(db)
            .await?;

        info!(
            "Removed {} course records for user {user_id}",
            result.rows_affected
        );
        Ok(result.rows_affected)
    }

    /// The user's enrollment records
    pub async fn courses_taken(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<courses_taken::Model>, DbErr> {
        courses_taken::Entity::find()
            .filter(courses_taken::Column::UserId.eq(user_id))
            .order_by_asc(courses_taken::Column::Id)
            .all(db)
            .await
    }

    /// The user's enrollment records paired with their courses
    pub async fn my_courses(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<(courses_taken::Model, courses::Model)>, DbErr> {
        let rows = courses_taken::Entity::find()
            .filter(courses_taken::Column::UserId.eq(user_id))
            .order_by_asc(courses_taken::Column::Id)
            .find_also_related(courses::Entity)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(taken, course)| course.map(|c| (taken, c)))
            .collect())
    }

    /// A concurrent request may insert between the check and our insert
    fn map_duplicate(err: DbErr, course_id: i32) -> ServiceError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ServiceError::AlreadyEnrolled { course_id }
            }
            _ => ServiceError::Db(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_course, insert_user, setup_db};

    async fn stored_count(db: &DatabaseConnection, user_id: i32, course_id: i32) -> u64 {
        courses_taken::Entity::find()
            .filter(courses_taken::Column::UserId.eq(user_id))
            .filter(courses_taken::Column::CourseId.eq(course_id))
            .count(db)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn add_courses_enrolls_in_order() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let a = insert_course(&db, "CSE 101").await;
        let b = insert_course(&db, "CSE 102").await;

        let added = EnrollmentService::add_courses(&db, user.id, &[b.id, a.id])
            .await
            .unwrap();

        assert_eq!(added.len(), 2);
        assert_eq!(added[0].course_id, b.id);
        assert_eq!(added[1].course_id, a.id);
        assert!(added.iter().all(|t| t.is_enrolled && t.final_grade.is_none()));
        assert_eq!(
            EnrollmentService::courses_taken(&db, user.id).await.unwrap(),
            added
        );
    }

    #[tokio::test]
    async fn duplicate_in_one_batch_keeps_single_record() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let course = insert_course(&db, "CSE 101").await;

        let err = EnrollmentService::add_courses(&db, user.id, &[course.id, course.id])
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::AlreadyEnrolled { course_id } if course_id == course.id));
        assert_eq!(stored_count(&db, user.id, course.id).await, 1);
    }

    #[tokio::test]
    async fn duplicate_aborts_rest_of_batch() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let a = insert_course(&db, "CSE 101").await;
        let b = insert_course(&db, "CSE 102").await;
        let c = insert_course(&db, "CSE 103").await;

        EnrollmentService::add_courses(&db, user.id, &[b.id])
            .await
            .unwrap();
        let err = EnrollmentService::add_courses(&db, user.id, &[a.id, b.id, c.id])
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::AlreadyEnrolled { .. }));
        assert_eq!(stored_count(&db, user.id, a.id).await, 1);
        assert_eq!(stored_count(&db, user.id, c.id).await, 0);
    }

    #[tokio::test]
    async fn unique_index_violation_is_already_enrolled() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let course = insert_course(&db, "CSE 101").await;

        EnrollmentService::add_courses(&db, user.id, &[course.id])
            .await
            .unwrap();

        // Same insert a concurrent request would make after passing the existence check
        let err = courses_taken::ActiveModel {
            course_id: Set(course.id),
            user_id: Set(user.id),
            is_enrolled: Set(true),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap_err();

        let mapped = EnrollmentService::map_duplicate(err, course.id);
        assert!(matches!(mapped, ServiceError::AlreadyEnrolled { course_id } if course_id == course.id));
        assert_eq!(stored_count(&db, user.id, course.id).await, 1);
    }

    #[tokio::test]
    async fn other_db_errors_are_not_remapped() {
        let mapped = EnrollmentService::map_duplicate(DbErr::Custom("boom".into()), 1);
        assert!(matches!(mapped, ServiceError::Db(DbErr::Custom(_))));
    }

    #[tokio::test]
    async fn other_users_do_not_block_enrollment() {
        let db = setup_db().await;
        let alice = insert_user(&db, "alice").await;
        let bob = insert_user(&db, "bob").await;
        let course = insert_course(&db, "CSE 101").await;

        EnrollmentService::add_courses(&db, alice.id, &[course.id])
            .await
            .unwrap();
        EnrollmentService::add_courses(&db, bob.id, &[course.id])
            .await
            .unwrap();

        assert_eq!(stored_count(&db, alice.id, course.id).await, 1);
        assert_eq!(stored_count(&db, bob.id, course.id).await, 1);
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;

        let err = EnrollmentService::add_courses(&db, user.id, &[999])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "course", id: 999 }));
    }

    #[tokio::test]
    async fn remove_only_touches_own_records() {
        let db = setup_db().await;
        let alice = insert_user(&db, "alice").await;
        let bob = insert_user(&db, "bob").await;
        let course = insert_course(&db, "CSE 101").await;

        EnrollmentService::add_courses(&db, alice.id, &[course.id])
            .await
            .unwrap();
        EnrollmentService::add_courses(&db, bob.id, &[course.id])
            .await
            .unwrap();

        let removed = EnrollmentService::remove_courses(&db, alice.id, &[course.id])
            .await
            .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(stored_count(&db, alice.id, course.id).await, 0);
        assert_eq!(stored_count(&db, bob.id, course.id).await, 1);
    }

    #[tokio::test]
    async fn removing_untaken_course_is_noop() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let course = insert_course(&db, "CSE 101").await;

        let removed = EnrollmentService::remove_courses(&db, user.id, &[course.id, 12345])
            .await
            .unwrap();
        assert_eq!(removed, 0);
        assert_eq!(
            EnrollmentService::remove_courses(&db, user.id, &[])
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn re_adding_after_removal_succeeds() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let course = insert_course(&db, "CSE 101").await;

        EnrollmentService::add_courses(&db, user.id, &[course.id])
            .await
            .unwrap();
        EnrollmentService::remove_courses(&db, user.id, &[course.id])
            .await
            .unwrap();
        EnrollmentService::add_courses(&db, user.id, &[course.id])
            .await
            .unwrap();

        assert_eq!(stored_count(&db, user.id, course.id).await, 1);
    }

    #[tokio::test]
    async fn my_courses_joins_course_details() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let other = insert_user(&db, "bob").await;
        let course = insert_course(&db, "CSE 101").await;

        EnrollmentService::add_courses(&db, user.id, &[course.id])
            .await
            .unwrap();
        EnrollmentService::add_courses(&db, other.id, &[course.id])
            .await
            .unwrap();

        let mine = EnrollmentService::my_courses(&db, user.id).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].0.user_id, user.id);
        assert_eq!(mine[0].1, course);
    }
}
