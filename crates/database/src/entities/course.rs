use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub units: Option<i32>,
    pub instructor: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
