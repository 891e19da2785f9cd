//! Floor Plan
//!
//! The spatial canvas: cover-fit background image, centered floor-plan
//! image, hidden room boundaries, and device nodes at mapped positions.
//! Scrolls when the minimum plan size exceeds the canvas.

use gpui::{
    Context, IntoElement, ParentElement, Render, Styled, Window, div, img, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::constants::{
    BACKGROUND_IMAGE_HEIGHT, BACKGROUND_IMAGE_WIDTH, CANVAS_SPLIT_RATIO, PAGE_HEADER_HEIGHT,
    SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH,
};
use crate::features::devices::device_node::DeviceNode;
use crate::spatial::coordinates::{Breakpoint, FloorPlanFrame};

/// Extra scroll room around an overflowing floor plan
const SCROLL_MARGIN: f32 = 100.0;

/// Floor plan canvas component
pub struct FloorPlan {
    entities: AppEntities,
}

impl FloorPlan {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Selection changes both the canvas width and the node visuals
        cx.observe(&entities.selection, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    /// Canvas size available to the floor plan, derived from the window
    /// viewport minus the sidebar and page header, and split when a
    /// detail panel is open
    fn canvas_size(&self, window: &Window, cx: &Context<Self>) -> (f32, f32) {
        let viewport = window.viewport_size();
        let sidebar_width = if self.entities.navigation.read(cx).sidebar_collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        };

        let mut width = f32::from(viewport.width) - sidebar_width;
        if self.entities.selection.read(cx).selected().is_some() {
            width *= CANVAS_SPLIT_RATIO;
        }
        let height = f32::from(viewport.height) - PAGE_HEADER_HEIGHT;

        (width.max(1.0), height.max(1.0))
    }
}

impl Render for FloorPlan {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (canvas_width, canvas_height) = self.canvas_size(window, cx);
        let frame = FloorPlanFrame::new(canvas_width, canvas_height);

        let node_scale = match Breakpoint::classify(canvas_width) {
            Breakpoint::Mobile => 0.8,
            _ => 1.0,
        };

        // Content area grows past the canvas when the plan overflows
        let content_width = if frame.needs_scroll() {
            canvas_width.max(frame.plan_width + SCROLL_MARGIN)
        } else {
            canvas_width
        };
        let content_height = if frame.needs_scroll() {
            canvas_height.max(frame.plan_height + SCROLL_MARGIN)
        } else {
            canvas_height
        };

        // Cover-fit background
        let bg_scale = frame.base_image_scale(BACKGROUND_IMAGE_WIDTH, BACKGROUND_IMAGE_HEIGHT);
        let bg_width = BACKGROUND_IMAGE_WIDTH * bg_scale;
        let bg_height = BACKGROUND_IMAGE_HEIGHT * bg_scale;

        let directory = self.entities.directory.read(cx);
        let rooms = directory.rooms.clone();
        let devices = directory.devices.clone();
        let selection = self.entities.selection.read(cx);
        let selected_ids: Vec<String> = devices
            .iter()
            .filter(|d| selection.is_selected(&d.id))
            .map(|d| d.id.clone())
            .collect();

        div()
            .id("floor-plan-canvas")
            .flex_1()
            .h_full()
            .overflow_scroll()
            .child(
                div()
                    .relative()
                    .w(px(content_width))
                    .h(px(content_height))
                    .overflow_hidden()
                    .child(
                        // Background image, centered cover fit
                        img("images/background.png")
                            .absolute()
                            .left(px((canvas_width - bg_width) / 2.0))
                            .top(px((canvas_height - bg_height) / 2.0))
                            .w(px(bg_width))
                            .h(px(bg_height)),
                    )
                    .child(
                        // Floor plan image
                        img("images/floor_plan.png")
                            .absolute()
                            .left(px(frame.plan_x))
                            .top(px(frame.plan_y))
                            .w(px(frame.plan_width))
                            .h(px(frame.plan_height)),
                    )
                    .children(rooms.iter().map(|room| {
                        // Faint room boundaries over the plan
                        let rect = frame.room_to_canvas(&room.bounds);
                        div()
                            .absolute()
                            .left(px(rect.x))
                            .top(px(rect.y))
                            .w(px(rect.width))
                            .h(px(rect.height))
                            .border_1()
                            .border_color(gpui::rgba(0xe5e7eb70))
                            .rounded_sm()
                    }))
                    .children(devices.into_iter().map(|device| {
                        let point = frame.device_to_canvas(device.x, device.y);
                        let selected = selected_ids.contains(&device.id);
                        DeviceNode::new(
                            self.entities.clone(),
                            device,
                            point.x,
                            point.y,
                            selected,
                            node_scale,
                        )
                    })),
            )
    }
}
