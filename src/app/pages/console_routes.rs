use dioxus::prelude::*;

use crate::app::layouts::AcmHeader;
use crate::domain::navigation::{self, RouteEntry};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ConsoleLayout)]
    #[redirect("/", || Route::Welcome {})]
    #[route("/multicloud/welcome")]
    Welcome {},
    #[route("/multicloud/overview")]
    Overview {},
    #[route("/multicloud/clusters")]
    Clusters {},
    #[route("/multicloud/bare-metal-assets")]
    BareMetalAssets {},
    #[route("/multicloud/applications")]
    Applications {},
    #[route("/multicloud/policies")]
    Policies {},

    // Anything else still gets the shell, with nothing highlighted
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Console header initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn ConsoleLayout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let route = use_route::<Route>();
    let urlpath = route.to_string();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        AcmHeader { urlpath,
            Outlet::<Route> {}
        }
    }
}

// Placeholder content for a catalog route
#[component]
fn ConsolePage(entry: RouteEntry) -> Element {
    rsx! {
        section { class: "c-console-page",
            h1 { class: "c-console-page__title", "{entry.display_name}" }
            p { class: "c-console-page__path", "{entry.path_prefix}" }
        }
    }
}

#[component]
fn Welcome() -> Element {
    rsx! { ConsolePage { entry: navigation::HOME } }
}

#[component]
fn Overview() -> Element {
    rsx! { ConsolePage { entry: navigation::OVERVIEW } }
}

#[component]
fn Clusters() -> Element {
    rsx! { ConsolePage { entry: navigation::CLUSTERS } }
}

#[component]
fn BareMetalAssets() -> Element {
    rsx! { ConsolePage { entry: navigation::BARE_METAL } }
}

#[component]
fn Applications() -> Element {
    rsx! { ConsolePage { entry: navigation::APPLICATIONS } }
}

#[component]
fn Policies() -> Element {
    rsx! { ConsolePage { entry: navigation::GOVERN_RISK } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        section { class: "c-console-page c-console-page--missing",
            h1 { class: "c-console-page__title", "Page not found" }
            p { class: "c-console-page__path", "{path}" }
        }
    }
}
