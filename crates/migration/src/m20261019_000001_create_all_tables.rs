use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Subject)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Email).string())
                    .col(ColumnDef::new(Users::FirstName).string())
                    .col(ColumnDef::new(Users::LastName).string())
                    .col(ColumnDef::new(Users::GradDate).date())
                    .col(ColumnDef::new(Users::School).string())
                    .col(ColumnDef::new(Users::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create schools table
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schools::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schools::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Schools::Abbreviation).string().not_null())
                    .col(ColumnDef::new(Schools::StateName).string().not_null())
                    .col(
                        ColumnDef::new(Schools::StateAbbreviation)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(ColumnDef::new(Courses::Units).integer())
                    .col(ColumnDef::new(Courses::Instructor).string())
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create courses_taken table
        manager
            .create_table(
                Table::create()
                    .table(CoursesTaken::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoursesTaken::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CoursesTaken::CourseId).integer().not_null())
                    .col(ColumnDef::new(CoursesTaken::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(CoursesTaken::IsEnrolled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(CoursesTaken::FinalGrade).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses_taken-course_id")
                            .from(CoursesTaken::Table, CoursesTaken::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses_taken-user_id")
                            .from(CoursesTaken::Table, CoursesTaken::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_grade_categories table
        manager
            .create_table(
                Table::create()
                    .table(CourseGradeCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseGradeCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseGradeCategories::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseGradeCategories::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseGradeCategories::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseGradeCategories::Weight)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseGradeCategories::Score).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_grade_categories-course_id")
                            .from(
                                CourseGradeCategories::Table,
                                CourseGradeCategories::CourseId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_grade_categories-user_id")
                            .from(
                                CourseGradeCategories::Table,
                                CourseGradeCategories::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CourseGradeCategories::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CoursesTaken::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    Table,
    Id,
    Subject,
    Username,
    Email,
    FirstName,
    LastName,
    GradDate,
    School,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Schools {
    Table,
    Id,
    Name,
    Abbreviation,
    StateName,
    StateAbbreviation,
}

#[derive(DeriveIden)]
pub(crate) enum Courses {
    Table,
    Id,
    Code,
    Title,
    Description,
    Units,
    Instructor,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum CoursesTaken {
    Table,
    Id,
    CourseId,
    UserId,
    IsEnrolled,
    FinalGrade,
}

#[derive(DeriveIden)]
pub(crate) enum CourseGradeCategories {
    Table,
    Id,
    CourseId,
    UserId,
    Name,
    Weight,
    Score,
}
