//! Devices Page
//!
//! Spatial floor plan by default, with a grid alternative. Selecting a
//! device splits the content area and slides in the detail panel.

use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*,
};

use crate::app::entities::AppEntities;
use crate::components::layout::page_header::PageHeader;
use crate::components::primitives::button::Button;
use crate::features::devices::detail_panel::DetailPanel;
use crate::features::devices::floor_plan::FloorPlan;
use crate::features::devices::grid_view::GridView;

/// Which rendering of the device directory is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ViewMode {
    #[default]
    Spatial,
    Grid,
}

/// Devices section page
pub struct DevicesPage {
    entities: AppEntities,
    view_mode: ViewMode,
    floor_plan: Entity<FloorPlan>,
    grid_view: Entity<GridView>,
    detail_panel: Entity<DetailPanel>,
}

impl DevicesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let floor_plan = cx.new(|cx| FloorPlan::new(entities.clone(), cx));
        let grid_view = cx.new(|cx| GridView::new(entities.clone(), cx));
        let detail_panel = cx.new(|cx| DetailPanel::new(entities.clone(), cx));

        // Selection opens and closes the detail panel split
        cx.observe(&entities.selection, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            view_mode: ViewMode::default(),
            floor_plan,
            grid_view,
            detail_panel,
        }
    }

    fn set_view_mode(&mut self, mode: ViewMode, cx: &mut Context<Self>) {
        if self.view_mode != mode {
            self.view_mode = mode;
            cx.notify();
        }
    }
}

impl Render for DevicesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let has_selection = self.entities.selection.read(cx).selected().is_some();
        let view_mode = self.view_mode;

        let header = PageHeader::new("Devices")
            .child(
                Button::toggle("view-spatial", "Spatial", view_mode == ViewMode::Spatial)
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.set_view_mode(ViewMode::Spatial, cx);
                    }))
                    .into_any_element(),
            )
            .child(
                Button::toggle("view-grid", "Grid", view_mode == ViewMode::Grid)
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.set_view_mode(ViewMode::Grid, cx);
                    }))
                    .into_any_element(),
            );

        let content = match view_mode {
            ViewMode::Spatial => self.floor_plan.clone().into_any_element(),
            ViewMode::Grid => self.grid_view.clone().into_any_element(),
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .child(header)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(content)
                    .when(has_selection, |s| {
                        s.child(
                            div()
                                .w_2_5()
                                .h_full()
                                .child(self.detail_panel.clone()),
                        )
                    }),
            )
    }
}
