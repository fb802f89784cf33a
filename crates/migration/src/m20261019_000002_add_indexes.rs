use sea_orm_migration::prelude::*;

use crate::m20261019_000001_create_all_tables::{CourseGradeCategories, Courses, CoursesTaken};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One enrollment record per user and course
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_taken_user_id_course_id")
                    .table(CoursesTaken::Table)
                    .col(CoursesTaken::UserId)
                    .col(CoursesTaken::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_grade_categories_user_id_course_id")
                    .table(CourseGradeCategories::Table)
                    .col(CourseGradeCategories::UserId)
                    .col(CourseGradeCategories::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_code")
                    .table(Courses::Table)
                    .col(Courses::Code)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_courses_code").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_grade_categories_user_id_course_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_taken_user_id_course_id")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
