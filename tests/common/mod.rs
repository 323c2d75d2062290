//! Common test utilities for workspace-permissions
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures;
//!
//! let objects = fixtures::member_workspace();
//! ```

pub mod fixtures;

pub use fixtures::{duration_rows, member_workspace, staff_setting_workspace, write_temp_file};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
