//! Overview Feature - Dashboard with Metrics, Incidents, and Device Health

pub mod chart;
pub mod controller;
pub mod health_panel;
pub mod incidents_panel;
pub mod page;
