//! Navigation catalog and active-route resolution
//!
//! The sidebar knows a fixed set of console routes. The entry whose path
//! prefix appears in the current URL decides which group is expanded and
//! which item is highlighted.

/// One navigable console route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub id: &'static str,
    pub path_prefix: &'static str,
    pub group_id: &'static str,
    pub item_id: &'static str,
    pub display_name: &'static str,
}

/// Group/item pair derived from a URL path. Both empty means no match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveRoute {
    pub group_id: String,
    pub item_id: String,
}

impl ActiveRoute {
    pub fn is_match(&self) -> bool {
        !self.group_id.is_empty() || !self.item_id.is_empty()
    }
}

pub const HOME: RouteEntry = RouteEntry {
    id: "home",
    path_prefix: "/multicloud/welcome",
    group_id: "home",
    item_id: "home_welcome",
    display_name: "Home",
};

pub const OVERVIEW: RouteEntry = RouteEntry {
    id: "overview",
    path_prefix: "/multicloud/overview",
    group_id: "observe",
    item_id: "observe_overview",
    display_name: "Overview",
};

pub const CLUSTERS: RouteEntry = RouteEntry {
    id: "clusters",
    path_prefix: "/multicloud/clusters",
    group_id: "automate",
    item_id: "automate_clusters",
    display_name: "Clusters",
};

pub const BARE_METAL: RouteEntry = RouteEntry {
    id: "baremetal",
    path_prefix: "/multicloud/bare-metal-assets",
    group_id: "automate",
    item_id: "automate_baremetal",
    display_name: "Bare metal assets",
};

pub const APPLICATIONS: RouteEntry = RouteEntry {
    id: "applications",
    path_prefix: "/multicloud/applications",
    group_id: "manage",
    item_id: "manage_applications",
    display_name: "Manage applications",
};

pub const GOVERN_RISK: RouteEntry = RouteEntry {
    id: "grc",
    path_prefix: "/multicloud/policies",
    group_id: "grc",
    item_id: "grc_govern_risk",
    display_name: "Govern risk",
};

/// Catalog in resolution order. Later entries win on ambiguous matches.
pub const NAV_CATALOG: [RouteEntry; 6] =
    [HOME, OVERVIEW, CLUSTERS, BARE_METAL, APPLICATIONS, GOVERN_RISK];

/// Resolve the active group/item for `path`.
///
/// Every entry whose prefix occurs anywhere in the path overwrites the result,
/// so the last matching entry in catalog order wins. This is not a
/// longest-prefix match: a catalog that needs specificity must list the more
/// specific prefix after the general one.
pub fn resolve_active_route(path: &str, catalog: &[RouteEntry]) -> ActiveRoute {
    let mut active = ActiveRoute::default();
    if path.is_empty() {
        return active;
    }

    for entry in catalog {
        if path.contains(entry.path_prefix) {
            active.group_id = entry.group_id.to_string();
            active.item_id = entry.item_id.to_string();
        }
    }

    active
}

/// A node of the rendered sidebar tree
#[derive(Debug, Clone, PartialEq)]
pub enum NavNode {
    Item(RouteEntry),
    Group {
        group_id: &'static str,
        title: &'static str,
        items: Vec<RouteEntry>,
    },
}

/// Sidebar layout: standalone items and the expandable groups
pub fn sidebar_tree() -> Vec<NavNode> {
    vec![
        NavNode::Item(HOME),
        NavNode::Group {
            group_id: "observe",
            title: "Observe Environments",
            items: vec![OVERVIEW],
        },
        NavNode::Group {
            group_id: "automate",
            title: "Automate Infrastructure",
            items: vec![CLUSTERS, BARE_METAL],
        },
        NavNode::Item(APPLICATIONS),
        NavNode::Item(GOVERN_RISK),
    ]
}
