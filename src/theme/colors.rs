//! Colors - HomeView Theme Colors

use gpui::{Rgba, rgb};

/// HomeView color palette - All colors are accessed via associated functions
pub struct HvColors;

impl HvColors {
    // Primary colors
    /// Primary accent - Blue (active nav items, selection rings)
    pub fn primary() -> Rgba {
        rgb(0x3b82f6)
    }
    /// Light primary tint (active nav background)
    pub fn primary_tint() -> Rgba {
        rgb(0xdbeafe)
    }

    // Background colors
    /// Main background
    pub fn background() -> Rgba {
        rgb(0xf9fafb)
    }
    /// Content area / card background
    pub fn content_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Inactive card background
    pub fn card_muted_bg() -> Rgba {
        rgb(0xf3f4f6)
    }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba {
        rgb(0x111827)
    }
    /// Secondary text
    pub fn text_secondary() -> Rgba {
        rgb(0x6b7280)
    }
    /// Muted text
    pub fn text_muted() -> Rgba {
        rgb(0x9ca3af)
    }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba {
        rgb(0xffffff)
    }

    // Status colors
    /// Success / active - Green
    pub fn success() -> Rgba {
        rgb(0x10b981)
    }
    /// Warning - Amber
    pub fn warning() -> Rgba {
        rgb(0xf59e0b)
    }
    /// Error / critical - Red
    pub fn danger() -> Rgba {
        rgb(0xef4444)
    }
    /// Inactive - Slate gray
    pub fn inactive() -> Rgba {
        rgb(0x6b7280)
    }

    // Border colors
    /// Default border
    pub fn border() -> Rgba {
        rgb(0xe5e7eb)
    }

    // Device node colors
    /// Device disc fill
    pub fn device_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Selection ring around a selected device node
    pub fn selection_ring() -> Rgba {
        rgb(0x3b82f6)
    }

    // Severity colors (incidents panel)
    pub fn severity_critical() -> Rgba {
        rgb(0xdc2626)
    }
    pub fn severity_high() -> Rgba {
        rgb(0xea580c)
    }
    pub fn severity_medium() -> Rgba {
        rgb(0xd97706)
    }
    pub fn severity_low() -> Rgba {
        rgb(0x2563eb)
    }
}
