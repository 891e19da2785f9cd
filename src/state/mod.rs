//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod dashboard_state;
pub mod directory_state;
pub mod navigation_state;
pub mod selection_state;
