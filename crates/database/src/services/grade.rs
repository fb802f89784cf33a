use crate::{
    entities::{course_grade_categories, courses_taken},
    error::ServiceError,
};
use log::info;
use models::grade::weighted_grade;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Grade categories of one taken course together with its recorded grade
#[derive(Debug, Clone, PartialEq)]
pub struct GradeBook {
    pub categories: Vec<course_grade_categories::Model>,
    pub final_grade: Option<f64>,
}

impl GradeBook {
    /// Weighted average of the scored categories
    pub fn calculated_grade(&self) -> Option<f64> {
        weighted_grade(self.categories.iter().map(|c| (c.weight, c.score)))
    }
}

pub struct GradeService;

impl GradeService {
    pub async fn get_grade_categories(
        db: &DatabaseConnection,
        user_id: i32,
        course_id: i32,
        course_taken_id: i32,
    ) -> Result<GradeBook, ServiceError> {
        let categories = course_grade_categories::Entity::find()
            .filter(course_grade_categories::Column::UserId.eq(user_id))
            .filter(course_grade_categories::Column::CourseId.eq(course_id))
            .order_by_asc(course_grade_categories::Column::Id)
            .all(db)
            .await?;

        let taken = Self::find_owned(db, user_id, course_taken_id)
            .await?
            .ok_or(ServiceError::not_found("course taken", course_taken_id))?;

        Ok(GradeBook {
            categories,
            final_grade: taken.final_grade,
        })
    }

    /// Records `grade` as the final grade; the value is stored as given
    pub async fn submit_grade(
        db: &DatabaseConnection,
        user_id: i32,
        course_taken_id: i32,
        grade: Option<f64>,
    ) -> Result<courses_taken::Model, ServiceError> {
        let taken = Self::find_owned(db, user_id, course_taken_id)
            .await?
            .ok_or(ServiceError::not_found("course taken", course_taken_id))?;

        let mut taken: courses_taken::ActiveModel = taken.into();
        taken.final_grade = Set(grade);
        let taken = taken.update(db).await?;

        info!("User {user_id} set final grade of record {course_taken_id} to {grade:?}");
        Ok(taken)
    }

    async fn find_owned(
        db: &DatabaseConnection,
        user_id: i32,
        course_taken_id: i32,
    ) -> Result<Option<courses_taken::Model>, DbErr> {
        courses_taken::Entity::find_by_id(course_taken_id)
            .filter(courses_taken::Column::UserId.eq(user_id))
            .one(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::enrollment::EnrollmentService,
        test_utils::{insert_course, insert_user, setup_db},
    };

    async fn insert_category(
        db: &DatabaseConnection,
        user_id: i32,
        course_id: i32,
        name: &str,
        weight: f64,
        score: Option<f64>,
    ) -> course_grade_categories::Model {
        course_grade_categories::ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            name: Set(name.to_string()),
            weight: Set(weight),
            score: Set(score),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn empty_categories_with_grade() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let course = insert_course(&db, "CSE 101").await;
        let taken = EnrollmentService::add_courses(&db, user.id, &[course.id])
            .await
            .unwrap()
            .remove(0);

        GradeService::submit_grade(&db, user.id, taken.id, Some(88.5))
            .await
            .unwrap();

        let book = GradeService::get_grade_categories(&db, user.id, course.id, taken.id)
            .await
            .unwrap();
        assert!(book.categories.is_empty());
        assert_eq!(book.final_grade, Some(88.5));
        assert_eq!(book.calculated_grade(), None);
    }

    #[tokio::test]
    async fn categories_are_scoped_to_user_and_course() {
        let db = setup_db().await;
        let alice = insert_user(&db, "alice").await;
        let bob = insert_user(&db, "bob").await;
        let course = insert_course(&db, "CSE 101").await;
        let other_course = insert_course(&db, "CSE 102").await;
        let taken = EnrollmentService::add_courses(&db, alice.id, &[course.id])
            .await
            .unwrap()
            .remove(0);

        let homework = insert_category(&db, alice.id, course.id, "Homework", 40.0, Some(90.0)).await;
        let exams = insert_category(&db, alice.id, course.id, "Exams", 60.0, Some(80.0)).await;
        insert_category(&db, bob.id, course.id, "Homework", 50.0, Some(10.0)).await;
        insert_category(&db, alice.id, other_course.id, "Labs", 50.0, Some(10.0)).await;

        let book = GradeService::get_grade_categories(&db, alice.id, course.id, taken.id)
            .await
            .unwrap();

        assert_eq!(book.categories, vec![homework, exams]);
        assert_eq!(book.final_grade, None);
        let calculated = book.calculated_grade().unwrap();
        assert!((calculated - 84.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let course = insert_course(&db, "CSE 101").await;

        let err = GradeService::get_grade_categories(&db, user.id, course.id, 77)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 77, .. }));

        let err = GradeService::submit_grade(&db, user.id, 77, Some(1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 77, .. }));
    }

    #[tokio::test]
    async fn cannot_grade_another_users_record() {
        let db = setup_db().await;
        let alice = insert_user(&db, "alice").await;
        let bob = insert_user(&db, "bob").await;
        let course = insert_course(&db, "CSE 101").await;
        let taken = EnrollmentService::add_courses(&db, alice.id, &[course.id])
            .await
            .unwrap()
            .remove(0);

        let err = GradeService::submit_grade(&db, bob.id, taken.id, Some(0.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));

        let book = GradeService::get_grade_categories(&db, alice.id, course.id, taken.id)
            .await
            .unwrap();
        assert_eq!(book.final_grade, None);
    }

    #[tokio::test]
    async fn grades_are_stored_as_given() {
        let db = setup_db().await;
        let user = insert_user(&db, "alice").await;
        let course = insert_course(&db, "CSE 101").await;
        let taken = EnrollmentService::add_courses(&db, user.id, &[course.id])
            .await
            .unwrap()
            .remove(0);

        for grade in [Some(142.0), Some(-3.5), None] {
            let updated = GradeService::submit_grade(&db, user.id, taken.id, grade)
                .await
                .unwrap();
            assert_eq!(updated.final_grade, grade);

            let book = GradeService::get_grade_categories(&db, user.id, course.id, taken.id)
                .await
                .unwrap();
            assert_eq!(book.final_grade, grade);
        }
    }
}
