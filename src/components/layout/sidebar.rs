//! Sidebar Component
//!
//! Navigation sidebar with section links and a collapse toggle.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH};
use crate::theme::colors::HvColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe navigation changes (active section, collapse)
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        section: Section,
        active_section: Section,
        collapsed: bool,
        _cx: &Context<Self>,
    ) -> impl IntoElement {
        let is_active = section == active_section;
        let entities = self.entities.clone();

        let bg_color = if is_active {
            HvColors::primary_tint()
        } else {
            gpui::rgba(0x00000000)
        };
        let text_color = if is_active {
            HvColors::primary()
        } else {
            HvColors::text_secondary()
        };

        let mut item = div()
            .id(SharedString::from(format!("nav-{:?}", section)))
            .w_full()
            .px_3()
            .py_2()
            .rounded_md()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .flex()
            .items_center()
            .when(collapsed, |s| s.justify_center())
            .hover(|s| s.bg(HvColors::card_muted_bg()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.navigation.update(cx, |nav, cx| {
                    nav.set_active_section(section);
                    cx.notify();
                });
            })
            .child(Icon::empty().path(section.icon_path()));

        if !collapsed {
            item = item.child(div().ml_3().child(section.label()));
        }

        item
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let nav = self.entities.navigation.read(cx);
        let active_section = nav.active_section;
        let collapsed = nav.sidebar_collapsed;

        let width = if collapsed {
            px(SIDEBAR_COLLAPSED_WIDTH)
        } else {
            px(SIDEBAR_WIDTH)
        };

        let entities = self.entities.clone();

        div()
            .w(width)
            .h_full()
            .bg(HvColors::sidebar_bg())
            .border_r_1()
            .border_color(HvColors::border())
            .flex()
            .flex_col()
            .child(
                // Header with product title and collapse toggle
                div()
                    .p_4()
                    .border_b_1()
                    .border_color(HvColors::border())
                    .flex()
                    .items_center()
                    .justify_between()
                    .when(!collapsed, |s| {
                        s.child(
                            div()
                                .text_size(px(18.0))
                                .font_weight(gpui::FontWeight::BOLD)
                                .text_color(HvColors::text_primary())
                                .child("HomeView"),
                        )
                    })
                    .child(
                        div()
                            .id("sidebar-toggle")
                            .p_2()
                            .rounded_md()
                            .cursor_pointer()
                            .text_color(HvColors::text_secondary())
                            .hover(|s| s.bg(HvColors::card_muted_bg()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.navigation.update(cx, |nav, cx| {
                                    nav.toggle_sidebar();
                                    cx.notify();
                                });
                            })
                            .child(Icon::empty().path("icons/menu.svg")),
                    ),
            )
            .child(
                // Navigation items
                div().flex_1().px_2().py_4().flex().flex_col().gap_1().children(
                    Section::all()
                        .iter()
                        .map(|section| {
                            self.render_nav_item(*section, active_section, collapsed, cx)
                        }),
                ),
            )
    }
}
