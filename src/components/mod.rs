//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on fixtures or do I/O.

pub mod layout;
pub mod primitives;
