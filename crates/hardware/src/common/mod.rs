//! Common utilities and types used throughout the vector unit.
//!
//! This module provides building blocks shared by every component. It includes:
//! 1. **Constants:** Register file geometry and CSR field layouts.
//! 2. **Error Handling:** Precondition and configuration error types.

/// Common constants used throughout the vector unit.
pub mod constants;

/// Error types for instruction preconditions and configuration.
pub mod error;

pub use error::{ConfigError, VectorError};
