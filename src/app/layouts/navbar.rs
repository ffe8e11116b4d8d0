use dioxus::prelude::*;

use crate::app::components::{AboutMenu, AboutModal, UserMenu};
use crate::domain::{HeaderToggle, HeaderToggles};

const LOGO: Asset = asset!("/assets/RHACM-Logo.svg");

/// Masthead: nav toggle, brand and the header tools
#[component]
pub fn Navbar(mut toggles: Signal<HeaderToggles>) -> Element {
    let sidebar_open = toggles.read().is_open(HeaderToggle::Sidebar);

    rsx! {
        header { class: "c-navbar",
            button {
                class: "c-navbar__nav-toggle",
                aria_label: "Global navigation",
                aria_expanded: "{sidebar_open}",
                onclick: move |_| toggles.write().toggle(HeaderToggle::Sidebar),
                "☰"
            }
            div { class: "c-navbar__brand",
                img { src: LOGO, alt: "RHACM Logo" }
            }
            // Tools are hidden below the large breakpoint (see main.css)
            div { class: "c-navbar__tools",
                AboutMenu { toggles }
                UserMenu { toggles }
                AboutModal { toggles }
            }
        }
    }
}
