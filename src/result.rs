use crate::error::Error as FourchanErr;

/// Result of every client operation.
pub type Result<T> = std::result::Result<T, FourchanErr>;
