pub mod course;
pub mod course_grade_category;
pub mod course_taken;
pub mod school;
pub mod user;

pub use course as courses;
pub use course_grade_category as course_grade_categories;
pub use course_taken as courses_taken;
pub use school as schools;
pub use user as users;
