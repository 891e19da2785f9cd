//! Utils - Shared Utility Functions

pub mod format;
