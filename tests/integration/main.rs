mod common;
mod enrollment_tests;
