//! Coordinates - Floor-Plan Frame Computation
//!
//! Computes where the fixed-aspect floor plan sits inside a canvas of a
//! given size, and maps normalized device/room positions into pixels.
//! Everything here is pure arithmetic over the canvas size; a new frame
//! is computed for every size input so there is no stale caching.

use crate::domain::room::UnitRect;

/// Minimum rendered floor plan size; the plan never shrinks below this
/// even on small viewports, which is what forces scrolling there.
pub const MIN_FLOOR_PLAN_WIDTH: f32 = 900.0;
pub const MIN_FLOOR_PLAN_HEIGHT: f32 = 600.0;

const MOBILE_MAX_WIDTH: f32 = 768.0;
const TABLET_MAX_WIDTH: f32 = 1024.0;

/// Breakpoint classification of the canvas width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Classify a canvas width
    pub fn classify(canvas_width: f32) -> Self {
        if canvas_width < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if canvas_width < TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Fraction of the canvas the floor plan occupies at this breakpoint
    pub fn size_multiplier(&self) -> f32 {
        match self {
            Breakpoint::Mobile => 0.85,
            Breakpoint::Tablet => 0.75,
            Breakpoint::Desktop => 0.70,
        }
    }
}

/// A canvas-pixel point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

/// A canvas-pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The computed placement of the floor plan within a canvas
///
/// The origin may be negative when the minimum plan size forces the plan
/// larger than the canvas; that is the signal for "needs scroll".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorPlanFrame {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub plan_x: f32,
    pub plan_y: f32,
    pub plan_width: f32,
    pub plan_height: f32,
}

impl FloorPlanFrame {
    /// Compute the frame for a canvas size, in pixels
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        let k = Breakpoint::classify(canvas_width).size_multiplier();

        let plan_width = (canvas_width * k).max(MIN_FLOOR_PLAN_WIDTH);
        let plan_height = (canvas_height * k).max(MIN_FLOOR_PLAN_HEIGHT);

        Self {
            canvas_width,
            canvas_height,
            plan_x: (canvas_width - plan_width) / 2.0,
            plan_y: (canvas_height - plan_height) / 2.0,
            plan_width,
            plan_height,
        }
    }

    /// Map a normalized (0-1) position to canvas pixel coordinates
    pub fn device_to_canvas(&self, x: f64, y: f64) -> CanvasPoint {
        CanvasPoint {
            x: self.plan_x + (x as f32) * self.plan_width,
            y: self.plan_y + (y as f32) * self.plan_height,
        }
    }

    /// Map a normalized room bounding box to canvas pixels
    pub fn room_to_canvas(&self, bounds: &UnitRect) -> CanvasRect {
        let origin = self.device_to_canvas(bounds.x, bounds.y);
        CanvasRect {
            x: origin.x,
            y: origin.y,
            width: (bounds.width as f32) * self.plan_width,
            height: (bounds.height as f32) * self.plan_height,
        }
    }

    /// Minimal uniform scale so an image of the given intrinsic size
    /// covers the canvas without gaps ("cover" fit, not "contain")
    pub fn base_image_scale(&self, image_width: f32, image_height: f32) -> f32 {
        (self.canvas_width / image_width).max(self.canvas_height / image_height)
    }

    /// True iff the plan exceeds the canvas in either dimension
    pub fn needs_scroll(&self) -> bool {
        self.plan_width > self.canvas_width || self.plan_height > self.canvas_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_classification() {
        assert_eq!(Breakpoint::classify(400.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1023.9), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1024.0), Breakpoint::Desktop);
    }

    #[test]
    fn test_plan_is_centered() {
        let frame = FloorPlanFrame::new(1000.0, 800.0);
        assert_eq!(frame.plan_x, (1000.0 - frame.plan_width) / 2.0);
        assert_eq!(frame.plan_y, (800.0 - frame.plan_height) / 2.0);
    }

    #[test]
    fn test_desktop_scenario_with_minimum_floor() {
        // 1000x800 at desktop k=0.7 gives 700x560, both below the
        // 900x600 floor, so the plan clamps and the origin is (50, 100).
        let frame = FloorPlanFrame::new(1000.0, 800.0);
        assert_eq!(frame.plan_width, 900.0);
        assert_eq!(frame.plan_height, 600.0);
        assert_eq!(frame.plan_x, 50.0);
        assert_eq!(frame.plan_y, 100.0);

        let point = frame.device_to_canvas(0.5, 0.3);
        assert_eq!(point, CanvasPoint { x: 500.0, y: 280.0 });
    }

    #[test]
    fn test_unit_square_corners() {
        let frame = FloorPlanFrame::new(1000.0, 800.0);

        let top_left = frame.device_to_canvas(0.0, 0.0);
        assert_eq!(top_left.x, frame.plan_x);
        assert_eq!(top_left.y, frame.plan_y);

        let bottom_right = frame.device_to_canvas(1.0, 1.0);
        assert_eq!(bottom_right.x, frame.plan_x + frame.plan_width);
        assert_eq!(bottom_right.y, frame.plan_y + frame.plan_height);
    }

    #[test]
    fn test_small_canvas_forces_scroll() {
        // Below the minimums, the plan stays 900x600 and the origin goes
        // negative: ((400-900)/2, (300-600)/2) = (-250, -150).
        let frame = FloorPlanFrame::new(400.0, 300.0);
        assert_eq!(frame.plan_width, 900.0);
        assert_eq!(frame.plan_height, 600.0);
        assert_eq!(frame.plan_x, -250.0);
        assert_eq!(frame.plan_y, -150.0);
        assert!(frame.needs_scroll());

        let point = frame.device_to_canvas(0.5, 0.5);
        assert_eq!(point, CanvasPoint { x: 200.0, y: 150.0 });
    }

    #[test]
    fn test_large_canvas_does_not_scroll() {
        let frame = FloorPlanFrame::new(2000.0, 1200.0);
        assert_eq!(frame.plan_width, 1400.0);
        assert_eq!(frame.plan_height, 840.0);
        assert!(!frame.needs_scroll());
    }

    #[test]
    fn test_base_image_scale_is_cover_fit() {
        let frame = FloorPlanFrame::new(1000.0, 800.0);

        // Landscape image: height is the binding dimension
        assert_eq!(
            frame.base_image_scale(1920.0, 1080.0),
            (1000.0f32 / 1920.0).max(800.0 / 1080.0)
        );
        // Portrait image: width is the binding dimension
        assert_eq!(
            frame.base_image_scale(1080.0, 1920.0),
            (1000.0f32 / 1080.0).max(800.0 / 1920.0)
        );
        // Square image
        assert_eq!(frame.base_image_scale(1000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_recomputes_for_new_canvas_size() {
        let first = FloorPlanFrame::new(800.0, 600.0);
        let second = FloorPlanFrame::new(1200.0, 900.0);
        assert_ne!(first.plan_x, second.plan_x);
        assert_ne!(first.plan_y, second.plan_y);
        assert_eq!(second.plan_x, (1200.0 - second.plan_width) / 2.0);
        assert_eq!(second.plan_y, (900.0 - second.plan_height) / 2.0);
    }

    #[test]
    fn test_room_bounds_share_the_unit_square() {
        let frame = FloorPlanFrame::new(1000.0, 800.0);
        let bounds = UnitRect {
            x: 0.1,
            y: 0.1,
            width: 0.4,
            height: 0.6,
        };
        let rect = frame.room_to_canvas(&bounds);
        assert_eq!(rect.x, frame.plan_x + 0.1 * frame.plan_width);
        assert_eq!(rect.y, frame.plan_y + 0.1 * frame.plan_height);
        assert_eq!(rect.width, 0.4 * frame.plan_width);
        assert_eq!(rect.height, 0.6 * frame.plan_height);
    }
}
