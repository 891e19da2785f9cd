//! Navigation - Top-Level Sections
//!
//! The sections reachable from the sidebar. A closed enum with total
//! mapping functions, so there is no "unknown section" path.

/// Top-level sections of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Dashboard with KPI metrics and panels
    #[default]
    Overview,
    /// Spatial floor-plan and grid device views
    Devices,
    /// Automation flows (placeholder)
    Flows,
    /// Developer tooling (placeholder)
    Config,
    /// Notifications (placeholder)
    Notifications,
    /// User profile (placeholder)
    Profile,
}

impl Section {
    /// All sections in sidebar order
    pub fn all() -> &'static [Section] {
        &[
            Section::Overview,
            Section::Devices,
            Section::Flows,
            Section::Config,
            Section::Notifications,
            Section::Profile,
        ]
    }

    /// Sidebar label for the section
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Devices => "Devices",
            Section::Flows => "Flows",
            Section::Config => "Config",
            Section::Notifications => "Notifications",
            Section::Profile => "Profile",
        }
    }

    /// Icon asset path for the section
    pub fn icon_path(&self) -> &'static str {
        match self {
            Section::Overview => "icons/home.svg",
            Section::Devices => "icons/cpu.svg",
            Section::Flows => "icons/git-branch.svg",
            Section::Config => "icons/settings.svg",
            Section::Notifications => "icons/bell.svg",
            Section::Profile => "icons/user.svg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_is_overview() {
        assert_eq!(Section::default(), Section::Overview);
    }

    #[test]
    fn test_all_lists_six_sections() {
        assert_eq!(Section::all().len(), 6);
    }
}
