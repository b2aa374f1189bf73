/// Enrollment service interface
pub mod enrollment;

pub use enrollment::*;
