/// Module containing the enrollment service
pub mod enrollment_service;

pub use enrollment_service::*;
