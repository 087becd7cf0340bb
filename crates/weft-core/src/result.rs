//! Result type alias for Weft compiler operations

use crate::error::WeftError;

/// Standard Result type for Weft compiler operations
pub type Result<T> = std::result::Result<T, WeftError>;
