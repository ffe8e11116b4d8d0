use dioxus::prelude::*;

use crate::domain::{resolve_active_route, NavigationState, NAV_CATALOG};
use crate::shared::logging::log_route_resolved;

/// Sidebar navigation state seeded from `urlpath`.
///
/// The active route is re-derived whenever the path prop changes; clicks in
/// between mutate the returned signal directly.
pub fn use_navigation(urlpath: String) -> Signal<NavigationState> {
    let initial_path = urlpath.clone();
    let mut state = use_signal(move || NavigationState::seeded(&initial_path, &NAV_CATALOG));

    use_effect(use_reactive!(|(urlpath,)| {
        let active = resolve_active_route(&urlpath, &NAV_CATALOG);
        log_route_resolved(&urlpath, &active.group_id, &active.item_id);

        // Clicks since the last path change are kept unless the path disagrees
        let stale = !state.peek().matches_route(&active);
        if stale {
            state.write().apply_route(active);
        }
    }));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use std::cell::RefCell;

    thread_local! {
        static RENDERED: RefCell<Vec<NavigationState>> = const { RefCell::new(Vec::new()) };
    }

    #[component]
    fn SidebarState(urlpath: String) -> Element {
        let state = use_navigation(urlpath);
        RENDERED.with(|r| r.borrow_mut().push(state.read().clone()));
        rsx! {}
    }

    #[test]
    fn test_first_render_is_seeded_from_path() {
        RENDERED.with(|r| r.borrow_mut().clear());
        let mut dom = VirtualDom::new_with_props(
            SidebarState,
            SidebarStateProps {
                urlpath: "/multicloud/bare-metal-assets".to_string(),
            },
        );
        dom.rebuild_in_place();

        let first = RENDERED.with(|r| r.borrow().first().cloned());
        let first = first.expect("component rendered");
        assert!(first.is_group_active("automate"));
        assert!(first.is_item_active("automate_baremetal"));
        assert!(!first.switcher_open);
    }
}
