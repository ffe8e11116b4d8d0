use dioxus::prelude::*;

use crate::app::components::common::{Dropdown, DropdownItem, Modal, Spinner};
use crate::domain::{HeaderToggle, HeaderToggles, VersionResponse};
use crate::shared::constants::{DOCUMENTATION_URL, VERSION_FALLBACK, VERSION_PATH};
use crate::shared::hooks::{use_remote_value, use_session_actions};
use crate::shared::logging::LogOperation;
use crate::shared::services::WindowTarget;

/// Product version, shown as a spinner until the API answers
#[component]
pub fn AboutModalVersion() -> Element {
    let version = use_remote_value(
        VERSION_PATH,
        || VERSION_FALLBACK.to_string(),
        |r: VersionResponse| r.version,
    );
    let version = version.read().value.clone();

    rsx! {
        span { class: "version-details__no",
            if version == VERSION_FALLBACK {
                Spinner { size: "md".to_string() }
            } else {
                "{version}"
            }
        }
    }
}

/// "About" dropdown: documentation link and the about modal trigger
#[component]
pub fn AboutMenu(mut toggles: Signal<HeaderToggles>) -> Element {
    let actions = use_session_actions();
    let is_open = toggles.read().is_open(HeaderToggle::AboutMenu);

    rsx! {
        Dropdown {
            id: "toggle-about".to_string(),
            is_open,
            on_toggle: move |_| toggles.write().toggle(HeaderToggle::AboutMenu),
            label: rsx! { "About" },
            DropdownItem {
                on_click: move |_| actions.open(LogOperation::Navigation, DOCUMENTATION_URL, WindowTarget::NewContext),
                "Documentation"
            }
            DropdownItem {
                on_click: move |_| toggles.write().toggle(HeaderToggle::AboutModal),
                "About"
            }
        }
    }
}

#[component]
pub fn AboutModal(mut toggles: Signal<HeaderToggles>) -> Element {
    let is_open = toggles.read().is_open(HeaderToggle::AboutModal);

    rsx! {
        Modal {
            is_open,
            aria_label: "about-modal".to_string(),
            on_close: move |_| toggles.write().close(HeaderToggle::AboutModal),
            span { class: "version-details__label", "Version " }
            AboutModalVersion {}
            span { class: "spacer" }
            div { class: "copyright",
                p { "Copyright © 2020 IBM Corporation. All rights reserved." }
                p { "Copyright © 2020 Red Hat, Inc. All rights reserved." }
            }
        }
    }
}
