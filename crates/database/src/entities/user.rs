use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Subject claim of the identity provider's token
    #[sea_orm(unique)]
    pub subject: String,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub grad_date: Option<Date>,
    pub school: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_taken::Entity")]
    CoursesTaken,
    #[sea_orm(has_many = "super::course_grade_category::Entity")]
    GradeCategories,
}

impl Related<super::course_taken::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoursesTaken.def()
    }
}

impl Related<super::course_grade_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GradeCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
