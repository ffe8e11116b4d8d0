use dioxus::prelude::*;

use crate::app::components::common::{Dropdown, DropdownItem};
use crate::domain::NavigationState;
use crate::shared::constants::PRODUCT_NAME;
use crate::shared::hooks::{spawn_action, use_session_actions};

/// Switch between the cluster console perspectives.
///
/// Both perspectives leave this console for the cluster console; the open
/// flag lives in the navigation state.
#[component]
pub fn PerspectiveSwitcher(mut nav: Signal<NavigationState>) -> Element {
    let administrator_actions = use_session_actions();
    let developer_actions = administrator_actions.clone();
    let is_open = nav.read().switcher_open;

    rsx! {
        Dropdown {
            id: "toggle-perspective".to_string(),
            is_open,
            on_toggle: move |_| nav.write().toggle_switcher(),
            label: rsx! {
                span { class: "c-perspective__title", "{PRODUCT_NAME}" }
            },
            DropdownItem {
                on_click: move |_| spawn_action(&administrator_actions, |a| async move { a.launch_to_console("").await }),
                "Administrator"
            }
            DropdownItem {
                on_click: move |_| spawn_action(&developer_actions, |a| async move { a.launch_to_console("").await }),
                "Developer"
            }
        }
    }
}
