//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar navigation widths in pixels
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

/// Fixed page header height
pub const PAGE_HEADER_HEIGHT: f32 = 80.0;

/// Fraction of the viewport the floor plan canvas keeps while a
/// device detail panel is open
pub const CANVAS_SPLIT_RATIO: f32 = 0.6;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Simulated latency before a metric-card selection takes effect
pub const METRIC_SELECT_DELAY_MS: u64 = 300;

/// Battery level below which a device surfaces its battery as the vital
pub const LOW_BATTERY_THRESHOLD: u8 = 20;

/// Seed for the mock metric generators; fixed so fixtures are reproducible
pub const FIXTURE_SEED: u64 = 0x4849_5645; // "HIVE"

/// Intrinsic dimensions of the bundled background image
pub const BACKGROUND_IMAGE_WIDTH: f32 = 1920.0;
pub const BACKGROUND_IMAGE_HEIGHT: f32 = 1080.0;
