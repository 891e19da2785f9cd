//! Workspace - Main Shell with Sidebar and Content Area
//!
//! The workspace holds the sidebar and the content area and switches the
//! visible page on the active section.

use std::collections::HashMap;

use gpui::{
    AnyElement, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
    div, prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::components::layout::sidebar::Sidebar;
use crate::features::devices::page::DevicesPage;
use crate::features::overview::page::OverviewPage;
use crate::features::placeholder::PlaceholderPage;
use crate::theme::colors::HvColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    sidebar: Entity<Sidebar>,
    // Page views, created lazily and cached
    overview_page: Option<Entity<OverviewPage>>,
    devices_page: Option<Entity<DevicesPage>>,
    placeholder_pages: HashMap<Section, Entity<PlaceholderPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        // Re-render when the active section changes
        cx.observe(&entities.navigation, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        let overview_page = Some(cx.new(|cx| OverviewPage::new(entities.clone(), cx)));

        Self {
            entities,
            sidebar,
            overview_page,
            devices_page: None,
            placeholder_pages: HashMap::new(),
        }
    }

    /// Get or create the page view for the given section
    fn get_or_create_page(&mut self, section: Section, cx: &mut Context<Self>) -> AnyElement {
        match section {
            Section::Overview => {
                let page = self.overview_page.get_or_insert_with(|| {
                    cx.new(|cx| OverviewPage::new(self.entities.clone(), cx))
                });
                page.clone().into_any_element()
            }
            Section::Devices => {
                let page = self.devices_page.get_or_insert_with(|| {
                    cx.new(|cx| DevicesPage::new(self.entities.clone(), cx))
                });
                page.clone().into_any_element()
            }
            _ => {
                let page = self
                    .placeholder_pages
                    .entry(section)
                    .or_insert_with(|| cx.new(|_| PlaceholderPage::new(section)));
                page.clone().into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_section = self.entities.navigation.read(cx).active_section;
        let content = self.get_or_create_page(active_section, cx);

        div()
            .size_full()
            .flex()
            .flex_row()
            .bg(HvColors::background())
            .child(self.sidebar.clone())
            .child(
                // Content area
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(HvColors::background())
                    .child(content),
            )
    }
}
