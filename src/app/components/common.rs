use dioxus::prelude::*;

// Loading spinner (BEM: c-spinner)
#[component]
pub fn Spinner(#[props(default = "md".to_string())] size: String) -> Element {
    rsx! {
        span {
            class: "c-spinner c-spinner--{size}",
            role: "progressbar",
            aria_label: "Loading",
        }
    }
}

/// Dropdown with a toggle button. The open state is owned by the caller.
#[component]
pub fn Dropdown(
    id: String,
    is_open: bool,
    on_toggle: EventHandler<()>,
    label: Element,
    children: Element,
) -> Element {
    let dropdown_class = if is_open {
        "c-dropdown c-dropdown--open"
    } else {
        "c-dropdown"
    };

    rsx! {
        div { class: "{dropdown_class}",
            button {
                id: "{id}",
                class: "c-dropdown__toggle",
                aria_expanded: "{is_open}",
                aria_haspopup: "true",
                onclick: move |_| on_toggle.call(()),
                {label}
                span { class: "c-dropdown__caret", "▾" }
            }
            if is_open {
                ul { class: "c-dropdown__menu", role: "menu",
                    {children}
                }
            }
        }
    }
}

#[component]
pub fn DropdownItem(on_click: EventHandler<()>, children: Element) -> Element {
    rsx! {
        li { role: "none",
            button {
                class: "c-dropdown__item",
                role: "menuitem",
                onclick: move |_| on_click.call(()),
                {children}
            }
        }
    }
}

/// Small modal dialog with a close button
#[component]
pub fn Modal(
    is_open: bool,
    aria_label: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div { class: "c-modal__backdrop",
            div {
                class: "c-modal c-modal--small",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{aria_label}",
                button {
                    class: "c-modal__close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                div { class: "c-modal__body",
                    {children}
                }
            }
        }
    }
}
