//! HomeView Library
//!
//! This crate provides the main application logic for HomeView, a
//! smart-home control panel with an overview dashboard and a spatial
//! floor-plan device view.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod fixtures;
pub mod spatial;
pub mod state;
pub mod theme;
pub mod utils;
