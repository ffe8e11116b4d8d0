//! Browser side effects performed by session actions
//!
//! Opening a browsing context, submitting the hidden logout form and
//! reloading the page all go through `BrowserEffects`, so the actions stay
//! testable off the browser.

use std::rc::Rc;
use std::time::Duration;

/// Where a URL is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTarget {
    /// Replace the current page (`_self`)
    SameContext,
    /// New tab or window (`_blank`)
    NewContext,
}

impl WindowTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowTarget::SameContext => "_self",
            WindowTarget::NewContext => "_blank",
        }
    }
}

pub trait BrowserEffects {
    fn open_window(&self, url: &str, target: WindowTarget);

    /// POST a hidden form to `action` inside a hidden frame; `on_load` runs
    /// on every load of that frame (the blank document and the POST answer).
    fn submit_hidden_form(&self, action: &str, on_load: Rc<dyn Fn()>);

    /// Full page reload after `delay`
    fn schedule_reload(&self, delay: Duration);
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{BrowserEffects, WindowTarget};
    use crate::shared::constants::HIDDEN_FRAME_NAME;
    use gloo_timers::callback::Timeout;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlFormElement, HtmlIFrameElement};

    /// Effects backed by the real `window`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WebEffects;

    impl BrowserEffects for WebEffects {
        fn open_window(&self, url: &str, target: WindowTarget) {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.open_with_url_and_target(url, target.as_str()) {
                tracing::error!("Failed to open {}: {:?}", url, e);
            }
        }

        fn submit_hidden_form(&self, action: &str, on_load: Rc<dyn Fn()>) {
            if let Err(e) = submit_form_in_hidden_frame(action, on_load) {
                tracing::error!("Failed to submit logout form to {}: {:?}", action, e);
            }
        }

        fn schedule_reload(&self, delay: Duration) {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                if let Err(e) = window.location().reload() {
                    tracing::error!("Failed to reload page: {:?}", e);
                }
            })
            .forget();
        }
    }

    fn submit_form_in_hidden_frame(action: &str, on_load: Rc<dyn Fn()>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let frame: HtmlIFrameElement = document.create_element("iframe")?.dyn_into()?;
        frame.set_attribute("type", "hidden")?;
        frame.set_name(HIDDEN_FRAME_NAME);
        // Lives as long as the page: the frame may load any number of times
        let callback = Closure::<dyn FnMut()>::new(move || on_load());
        frame.set_onload(Some(callback.as_ref().unchecked_ref()));
        callback.forget();

        let form: HtmlFormElement = document.create_element("form")?.dyn_into()?;
        form.set_target(HIDDEN_FRAME_NAME);
        form.set_method("POST");
        form.set_action(action);

        body.append_child(&frame)?;
        body.append_child(&form)?;
        form.submit()
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebEffects;

/// Native stand-in: there is no page to navigate, so effects are only logged.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEffects;

#[cfg(not(target_arch = "wasm32"))]
impl BrowserEffects for LoggingEffects {
    fn open_window(&self, url: &str, target: WindowTarget) {
        tracing::warn!(url = url, target = target.as_str(), "open_window not available outside the browser");
    }

    fn submit_hidden_form(&self, action: &str, _on_load: Rc<dyn Fn()>) {
        tracing::warn!(action = action, "hidden form submission not available outside the browser");
    }

    fn schedule_reload(&self, delay: Duration) {
        tracing::warn!(delay_ms = delay.as_millis() as u64, "page reload not available outside the browser");
    }
}

#[cfg(target_arch = "wasm32")]
pub type DefaultEffects = WebEffects;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultEffects = LoggingEffects;
