pub mod form;
pub mod grade;
pub mod school;
