//! NavigationState - Active Section and Sidebar Density

use crate::app::navigation::Section;

/// State for top-level navigation
///
/// The two fields are independent flags; collapsing the sidebar never
/// touches the active section. Nothing here is persisted, so a restart
/// lands back on the defaults.
#[derive(Debug, Default)]
pub struct NavigationState {
    /// Currently visible section
    pub active_section: Section,
    /// Whether the sidebar shows icons only
    pub sidebar_collapsed: bool,
}

impl NavigationState {
    /// Switch the visible section (from a sidebar click)
    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Flip between icon-only and icon+label sidebar
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavigationState::default();
        assert_eq!(state.active_section, Section::Overview);
        assert!(!state.sidebar_collapsed);
    }

    #[test]
    fn test_set_active_section() {
        let mut state = NavigationState::default();
        state.set_active_section(Section::Devices);
        assert_eq!(state.active_section, Section::Devices);
    }

    #[test]
    fn test_toggle_sidebar_is_independent_of_section() {
        let mut state = NavigationState::default();
        state.set_active_section(Section::Flows);

        state.toggle_sidebar();
        assert!(state.sidebar_collapsed);
        assert_eq!(state.active_section, Section::Flows);

        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed);
    }
}
