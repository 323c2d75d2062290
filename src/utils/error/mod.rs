//! Error handling utilities
//!
//! This module provides the error type shared by permission evaluation, field sorting
//! and configuration loading.

pub mod error;

// Re-export commonly used types
pub use error::*;
