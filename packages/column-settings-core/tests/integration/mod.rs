//! Integration test suite.
//!
//! 1. File-backed persistence of column settings
//! 2. End-to-end table scenarios through the public API

pub mod end_to_end_tests;
pub mod file_store_tests;
