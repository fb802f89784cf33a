use chrono::NaiveDate;
use database::entities::users;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub grad_date: Option<NaiveDate>,
    pub school: Option<String>,
}

impl From<users::Model> for ProfileResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            grad_date: user.grad_date,
            school: user.school,
        }
    }
}

/// Template context of the profile page
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfilePage {
    pub profile: ProfileResponse,
    /// Names accepted for the `school` field
    pub school_choices: Vec<String>,
}
