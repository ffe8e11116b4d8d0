use crate::domain::navigation::{resolve_active_route, ActiveRoute, RouteEntry};

/// Sidebar selection plus the perspective switcher's open flag.
///
/// The two axes are independent: selecting an item never touches the
/// switcher and toggling the switcher never touches the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active_group: String,
    pub active_item: String,
    pub switcher_open: bool,
}

impl NavigationState {
    /// Initial state for a freshly mounted sidebar
    pub fn seeded(path: &str, catalog: &[RouteEntry]) -> Self {
        let active = resolve_active_route(path, catalog);
        Self {
            active_group: active.group_id,
            active_item: active.item_id,
            switcher_open: false,
        }
    }

    /// Whether the selection already points at `active`
    pub fn matches_route(&self, active: &ActiveRoute) -> bool {
        self.active_group == active.group_id && self.active_item == active.item_id
    }

    /// Replace the selection with a resolved route, keeping the switcher flag
    pub fn apply_route(&mut self, active: ActiveRoute) {
        self.active_group = active.group_id;
        self.active_item = active.item_id;
    }

    /// Apply a user selection. Ids are not checked against the catalog.
    pub fn select(&mut self, group_id: Option<&str>, item_id: Option<&str>) {
        if let Some(group_id) = group_id {
            self.active_group = group_id.to_string();
        }
        if let Some(item_id) = item_id {
            self.active_item = item_id.to_string();
        }
    }

    pub fn is_group_active(&self, group_id: &str) -> bool {
        self.active_group == group_id
    }

    pub fn is_item_active(&self, item_id: &str) -> bool {
        self.active_item == item_id
    }

    pub fn toggle_switcher(&mut self) {
        self.switcher_open = !self.switcher_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::NAV_CATALOG;

    #[test]
    fn test_seeded_from_bare_metal_path() {
        let state = NavigationState::seeded("/multicloud/bare-metal-assets", &NAV_CATALOG);
        assert_eq!(state.active_group, "automate");
        assert_eq!(state.active_item, "automate_baremetal");
        assert!(!state.switcher_open);
    }

    #[test]
    fn test_seeded_without_match_is_empty() {
        let state = NavigationState::seeded("/somewhere/else", &NAV_CATALOG);
        assert_eq!(state, NavigationState::default());
    }

    #[test]
    fn test_select_group_keeps_item() {
        let mut state = NavigationState::seeded("/multicloud/overview", &NAV_CATALOG);
        state.select(Some("automate"), None);
        assert_eq!(state.active_group, "automate");
        assert_eq!(state.active_item, "observe_overview");
    }

    #[test]
    fn test_select_item_keeps_group() {
        let mut state = NavigationState::seeded("/multicloud/overview", &NAV_CATALOG);
        state.select(None, Some("automate_clusters"));
        assert_eq!(state.active_group, "observe");
        assert_eq!(state.active_item, "automate_clusters");
    }

    #[test]
    fn test_select_accepts_unknown_ids() {
        let mut state = NavigationState::default();
        state.select(Some("not-a-group"), Some("not-an-item"));
        assert!(state.is_group_active("not-a-group"));
        assert!(state.is_item_active("not-an-item"));
    }

    #[test]
    fn test_active_reads() {
        let state = NavigationState::seeded("/multicloud/clusters", &NAV_CATALOG);
        assert!(state.is_group_active("automate"));
        assert!(!state.is_group_active("observe"));
        assert!(state.is_item_active("automate_clusters"));
        assert!(!state.is_item_active("automate_baremetal"));
    }

    #[test]
    fn test_switcher_independent_of_selection() {
        let mut state = NavigationState::seeded("/multicloud/policies", &NAV_CATALOG);
        state.toggle_switcher();
        assert!(state.switcher_open);
        assert_eq!(state.active_item, "grc_govern_risk");

        state.select(Some("home"), Some("home_welcome"));
        assert!(state.switcher_open);

        state.toggle_switcher();
        assert!(!state.switcher_open);
    }

    #[test]
    fn test_apply_route_keeps_switcher() {
        let mut state = NavigationState::seeded("/multicloud/welcome", &NAV_CATALOG);
        state.toggle_switcher();
        state.apply_route(resolve_active_route("/multicloud/applications", &NAV_CATALOG));
        assert_eq!(state.active_group, "manage");
        assert_eq!(state.active_item, "manage_applications");
        assert!(state.switcher_open);
    }

    #[test]
    fn test_seeded_state_matches_its_path() {
        let state = NavigationState::seeded("/multicloud/clusters", &NAV_CATALOG);
        assert!(state.matches_route(&resolve_active_route("/multicloud/clusters", &NAV_CATALOG)));
        assert!(!state.matches_route(&resolve_active_route("/multicloud/overview", &NAV_CATALOG)));
    }

    #[test]
    fn test_user_selection_is_stale_for_its_path() {
        let mut state = NavigationState::seeded("/multicloud/clusters", &NAV_CATALOG);
        state.select(Some("manage"), Some("manage_applications"));

        // Same path again: the click diverged, so the path wins back
        let active = resolve_active_route("/multicloud/clusters", &NAV_CATALOG);
        assert!(!state.matches_route(&active));
        state.apply_route(active);
        assert!(state.is_item_active("automate_clusters"));
    }
}
