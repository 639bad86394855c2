//! Integration test modules.
//!
//! Each module focuses on one area of the HTTP surface.

pub mod catalog_tests;
pub mod general_tests;
