//! # Unit Components
//!
//! This module organizes the unit tests by crate module, from shared error
//! types and configuration down to the arithmetic engine and the vector unit.

/// Unit tests for shared types.
///
/// This module covers error formatting and equality.
pub mod common;


/// Unit tests for the architectural state and execution units.
pub mod core;
