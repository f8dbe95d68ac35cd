//! Local UI chrome state (dark mode, dashboard tabs).
//!
//! Keeps transient presentation concerns out of domain state so rendering
//! controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available on the viewer dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewerTab {
    /// Browse and book hotels.
    #[default]
    Browse,
    /// The signed-in guest's own reservations.
    Reservations,
}

/// UI state for theme and dashboard navigation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub dark_mode: bool,
    pub active_tab: ViewerTab,
}
