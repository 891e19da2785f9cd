//! Incident - Recent Incident Entries for the Overview Panel

use gpui::Rgba;

use crate::theme::colors::HvColors;

/// Incident severity, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            Severity::Critical => HvColors::severity_critical(),
            Severity::High => HvColors::severity_high(),
            Severity::Medium => HvColors::severity_medium(),
            Severity::Low => HvColors::severity_low(),
        }
    }
}

/// A recent incident reported by a device
#[derive(Debug, Clone)]
pub struct Incident {
    pub id: String,
    pub severity: Severity,
    pub device_name: String,
    pub room: String,
    pub description: String,
    /// Pre-baked age caption like "2 minutes ago"
    pub age: String,
    /// Category tag like "connectivity" or "battery"
    pub category: String,
}
