pub mod course;
pub mod enrollment;
pub mod error;
pub mod grade;
pub mod profile;
pub mod school;
