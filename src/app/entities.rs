//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here and threaded explicitly
//! through the view tree; no view reaches for an ambient singleton.

use gpui::{App, AppContext, Entity, Global};

use crate::fixtures::Fixtures;
use crate::state::{
    dashboard_state::DashboardState, directory_state::DirectoryState,
    navigation_state::NavigationState, selection_state::SelectionState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Active section and sidebar density
    pub navigation: Entity<NavigationState>,
    /// Single-slot device selection
    pub selection: Entity<SelectionState>,
    /// Overview metrics and active-metric selection
    pub dashboard: Entity<DashboardState>,
    /// Loaded device/room/incident fixtures
    pub directory: Entity<DirectoryState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded fixtures
    pub fn init(fixtures: &Fixtures, cx: &mut App) -> Self {
        Self {
            navigation: cx.new(|_| NavigationState::default()),
            selection: cx.new(|_| SelectionState::default()),
            dashboard: cx.new(|_| DashboardState::new(fixtures.metrics.clone())),
            directory: cx.new(|_| DirectoryState::from_fixtures(fixtures)),
        }
    }
}
