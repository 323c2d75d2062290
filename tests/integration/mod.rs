//! Integration tests for workspace-permissions
//!
//! These tests drive the public API end to end without mocking.

pub mod config_tests;
pub mod duration_sort_tests;
pub mod permission_tests;
