//! Placeholder Pages
//!
//! "Coming soon" pages for sections that only exist as navigation targets.

use gpui::{
    Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};

use crate::app::navigation::Section;
use crate::components::layout::page_header::PageHeader;
use crate::theme::colors::HvColors;

/// A coming-soon page for a not-yet-built section
pub struct PlaceholderPage {
    section: Section,
}

impl PlaceholderPage {
    pub fn new(section: Section) -> Self {
        Self { section }
    }

    fn headline(&self) -> &'static str {
        match self.section {
            Section::Flows => "Automation flows",
            Section::Config => "Developer tooling",
            Section::Notifications => "Notifications",
            Section::Profile => "User profile",
            _ => "Coming soon",
        }
    }

    fn blurb(&self) -> &'static str {
        match self.section {
            Section::Flows => {
                "Create and manage automated workflows for your smart home devices. \
                 This feature will be available soon."
            }
            Section::Config => {
                "Access advanced settings, API configurations, and developer utilities. \
                 This feature will be available soon."
            }
            Section::Notifications => {
                "Review alerts and reminders from your devices. \
                 This feature will be available soon."
            }
            Section::Profile => {
                "Manage your account settings and preferences. \
                 This feature will be available soon."
            }
            _ => "This feature will be available soon.",
        }
    }
}

impl Render for PlaceholderPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .child(PageHeader::new(self.section.label()))
            .child(
                div()
                    .flex_1()
                    .bg(HvColors::content_bg())
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_4()
                            .child(
                                div()
                                    .text_size(px(24.0))
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(HvColors::text_primary())
                                    .child(self.headline()),
                            )
                            .child(
                                div()
                                    .max_w(px(420.0))
                                    .text_size(px(14.0))
                                    .text_color(HvColors::text_secondary())
                                    .child(self.blurb()),
                            ),
                    ),
            )
    }
}
