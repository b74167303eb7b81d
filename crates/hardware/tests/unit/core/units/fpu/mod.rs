//! # FPU Tests


/// Format layouts, sign constants, and element conversions.
pub mod formats;
