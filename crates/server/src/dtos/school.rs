use database::entities::schools;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SchoolResponse {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
    pub state_name: String,
    pub state_abbreviation: String,
}

impl From<schools::Model> for SchoolResponse {
    fn from(school: schools::Model) -> Self {
        Self {
            id: school.id,
            name: school.name,
            abbreviation: school.abbreviation,
            state_name: school.state_name,
            state_abbreviation: school.state_abbreviation,
        }
    }
}
