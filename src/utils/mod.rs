//! Utility modules
//!
//! - **error**: Error type and result alias
//! - **logging**: Structured logging setup

pub mod error; // Error handling
pub mod logging; // Logging setup

pub use error::{PermissionError, Result};
pub use logging::{LogLevel, init_logging};
