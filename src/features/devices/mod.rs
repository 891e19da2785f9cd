//! Devices Feature - Spatial Floor-Plan and Grid Views

pub mod controls;
pub mod detail_panel;
pub mod device_node;
pub mod floor_plan;
pub mod grid_view;
pub mod page;
