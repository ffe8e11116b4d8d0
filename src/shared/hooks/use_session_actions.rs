use dioxus::prelude::*;

use crate::shared::services::SessionActions;

/// Session actions bound to the browser, created once per component
pub fn use_session_actions() -> SessionActions {
    use_hook(SessionActions::for_browser)
}

/// Run a session action without blocking the event handler
pub fn spawn_action<F, Fut>(actions: &SessionActions, action: F)
where
    F: FnOnce(SessionActions) -> Fut,
    Fut: std::future::Future<Output = ()> + 'static,
{
    spawn(action(actions.clone()));
}
