pub mod course;
pub mod enrollment;
pub mod grade;
pub mod profile;
pub mod school;
