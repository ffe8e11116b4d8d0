use dioxus::prelude::*;

use crate::app::components::PerspectiveSwitcher;
use crate::domain::{sidebar_tree, NavNode, NavigationState, RouteEntry};
use crate::shared::hooks::{use_navigation, use_session_actions};
use crate::shared::logging::LogOperation;
use crate::shared::services::WindowTarget;

/// Sidebar with the perspective switcher and the navigation tree.
///
/// Stays mounted while collapsed so the selection survives a nav toggle.
#[component]
pub fn GlobalSidebar(urlpath: String, is_open: bool) -> Element {
    let nav = use_navigation(urlpath);

    let sidebar_class = if is_open {
        "c-sidebar"
    } else {
        "c-sidebar c-sidebar--collapsed"
    };

    rsx! {
        aside { class: "{sidebar_class}", aria_hidden: "{!is_open}",
            nav { class: "c-sidebar__nav", aria_label: "Global",
                PerspectiveSwitcher { nav }
                hr { class: "c-sidebar__separator" }
                ul { class: "c-nav__list",
                    {sidebar_tree().into_iter().map(|node| match node {
                        NavNode::Item(entry) => rsx! {
                            SidebarNavItem { key: "{entry.id}", entry, nav }
                        },
                        NavNode::Group { group_id, title, items } => rsx! {
                            NavGroup { key: "{group_id}", group_id, title, items, nav }
                        },
                    })}
                }
            }
        }
    }
}

// Expandable group, open only while it is the active group
#[component]
fn NavGroup(
    group_id: &'static str,
    title: &'static str,
    items: Vec<RouteEntry>,
    mut nav: Signal<NavigationState>,
) -> Element {
    let is_expanded = nav.read().is_group_active(group_id);
    let group_class = if is_expanded {
        "c-nav__item c-nav__item--expandable c-nav__item--expanded"
    } else {
        "c-nav__item c-nav__item--expandable"
    };

    rsx! {
        li { class: "{group_class}",
            button {
                class: "c-nav__group-toggle",
                aria_expanded: "{is_expanded}",
                onclick: move |_| nav.write().select(Some(group_id), None),
                "{title}"
            }
            if is_expanded {
                section { class: "c-nav__subnav",
                    ul { class: "c-nav__list",
                        for entry in items {
                            SidebarNavItem { key: "{entry.id}", entry, nav }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarNavItem(entry: RouteEntry, mut nav: Signal<NavigationState>) -> Element {
    let actions = use_session_actions();
    let is_active = nav.read().is_item_active(entry.item_id);

    let link_class = if is_active {
        "c-nav__link c-nav__link--current"
    } else {
        "c-nav__link"
    };
    let aria_current = if is_active { "page" } else { "false" };

    rsx! {
        li { class: "c-nav__item",
            a {
                class: "{link_class}",
                href: "{entry.path_prefix}",
                aria_current: "{aria_current}",
                onclick: move |evt| {
                    evt.prevent_default();
                    nav.write().select(Some(entry.group_id), Some(entry.item_id));
                    actions.open(LogOperation::Navigation, entry.path_prefix, WindowTarget::SameContext);
                },
                "{entry.display_name}"
            }
        }
    }
}
