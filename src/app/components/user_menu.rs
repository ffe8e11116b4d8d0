use dioxus::prelude::*;

use crate::app::components::common::{Dropdown, DropdownItem};
use crate::domain::{HeaderToggle, HeaderToggles, UsernameResponse};
use crate::shared::constants::{USERNAME_FALLBACK, USERNAME_PATH};
use crate::shared::hooks::{spawn_action, use_remote_value, use_session_actions};

/// Name of the signed-in user; empty until (and unless) the API answers
#[component]
pub fn DropdownName() -> Element {
    let username = use_remote_value(
        USERNAME_PATH,
        || USERNAME_FALLBACK.to_string(),
        |r: UsernameResponse| r.username,
    );
    let name = username.read().value.clone();

    rsx! {
        span { aria_label: "dropdown-username", "{name}" }
    }
}

/// User dropdown with logout and client configuration
#[component]
pub fn UserMenu(mut toggles: Signal<HeaderToggles>) -> Element {
    let logout_actions = use_session_actions();
    let configure_actions = logout_actions.clone();
    let is_open = toggles.read().is_open(HeaderToggle::UserMenu);

    rsx! {
        Dropdown {
            id: "toggle-id".to_string(),
            is_open,
            on_toggle: move |_| toggles.write().toggle(HeaderToggle::UserMenu),
            label: rsx! { DropdownName {} },
            DropdownItem {
                on_click: move |_| spawn_action(&logout_actions, |a| async move { a.logout().await }),
                "Logout"
            }
            DropdownItem {
                on_click: move |_| spawn_action(&configure_actions, |a| async move { a.configure_client().await }),
                "Configure client"
            }
        }
    }
}
