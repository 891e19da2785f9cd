//! Page Header Component
//!
//! Fixed-height header bar with a section title and optional actions on
//! the right-hand side.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::constants::PAGE_HEADER_HEIGHT;
use crate::theme::colors::HvColors;

/// Header bar shown at the top of every section page
#[derive(IntoElement)]
pub struct PageHeader {
    title: SharedString,
    actions: Vec<AnyElement>,
}

impl PageHeader {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            actions: Vec::new(),
        }
    }
}

impl ParentElement for PageHeader {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.actions.extend(elements);
    }
}

impl RenderOnce for PageHeader {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .h(px(PAGE_HEADER_HEIGHT))
            .px_6()
            .bg(HvColors::content_bg())
            .border_b_1()
            .border_color(HvColors::border())
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(HvColors::text_primary())
                    .child(self.title),
            )
            .child(div().flex().items_center().gap_4().children(self.actions))
    }
}
