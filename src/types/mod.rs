pub mod assessment;
pub mod config;
pub mod course;
pub mod schedule;
pub mod student;
