use dioxus::prelude::*;

use crate::domain::HeaderToggles;

/// Header toggles, owned by the shell that renders the header and sidebar
pub fn use_header_toggles() -> Signal<HeaderToggles> {
    use_signal(HeaderToggles::default)
}
