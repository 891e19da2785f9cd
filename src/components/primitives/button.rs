//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::HvColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Toggle button in its selected state
    Selected,
    /// Ghost button (transparent)
    Ghost,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a toggle button, selected or not
    pub fn toggle(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        selected: bool,
    ) -> Self {
        let variant = if selected {
            ButtonVariant::Selected
        } else {
            ButtonVariant::Ghost
        };
        Self::new(id, label).variant(variant)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                HvColors::primary(),
                HvColors::text_light(),
                gpui::rgba(0x2563ebff),
            ),
            ButtonVariant::Selected => (
                HvColors::primary(),
                HvColors::text_light(),
                gpui::rgba(0x2563ebff),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                HvColors::text_secondary(),
                gpui::rgba(0xf3f4f6ff),
            ),
        };

        let mut element = div()
            .id(self.id)
            .px_3()
            .py_1()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(13.0))
            .rounded_md()
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
