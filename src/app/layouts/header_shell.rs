use dioxus::prelude::*;

use crate::app::layouts::{GlobalSidebar, Navbar};
use crate::domain::HeaderToggle;
use crate::shared::hooks::use_header_toggles;

/// Console page chrome: header on top, sidebar and page content below.
///
/// `urlpath` is the current location; it decides which sidebar entry starts
/// out active.
#[component]
pub fn AcmHeader(urlpath: String, children: Element) -> Element {
    let toggles = use_header_toggles();
    let sidebar_open = toggles.read().is_open(HeaderToggle::Sidebar);

    rsx! {
        div { class: "c-page",
            Navbar { toggles }
            div { class: "c-page__body",
                GlobalSidebar { urlpath, is_open: sidebar_open }
                main { class: "c-page__main",
                    {children}
                }
            }
        }
    }
}
