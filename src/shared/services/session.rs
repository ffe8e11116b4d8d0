//! Session actions triggered from the header menus
//!
//! Each action fetches its parameters from the console API and then acts on
//! the browser. Failures are logged and the action is dropped; nothing is
//! returned to the caller.

use std::rc::Rc;

use crate::domain::{ConfigureResponse, ConsolePublicResponse, LogoutResponse};
use crate::shared::constants::{CONFIGURE_PATH, CONSOLE_PUBLIC_PATH, LOGOUT_PATH, RELOAD_DELAY};
use crate::shared::logging::{log_action_failed, log_logout, log_window_opened, LogOperation};
use crate::shared::services::api_service::ApiService;
use crate::shared::services::effects::{BrowserEffects, DefaultEffects, WindowTarget};
use crate::shared::services::transport::{DefaultTransport, JsonTransport};

pub struct SessionActions<T = DefaultTransport, E = DefaultEffects> {
    api: Rc<ApiService<T>>,
    effects: Rc<E>,
}

impl<T, E> Clone for SessionActions<T, E> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            effects: Rc::clone(&self.effects),
        }
    }
}

impl SessionActions<DefaultTransport, DefaultEffects> {
    /// Actions against the build-mode API host with the platform's effects.
    ///
    /// Debug builds send the session requests to the local backend too, not
    /// only the username and version lookups.
    pub fn for_browser() -> Self {
        Self::new(ApiService::new(), DefaultEffects::default())
    }
}

impl Default for SessionActions<DefaultTransport, DefaultEffects> {
    fn default() -> Self {
        Self::for_browser()
    }
}

impl<T: JsonTransport, E: BrowserEffects + 'static> SessionActions<T, E> {
    pub fn new(api: ApiService<T>, effects: E) -> Self {
        Self {
            api: Rc::new(api),
            effects: Rc::new(effects),
        }
    }

    /// Log out, posting to the identity provider first for admin sessions.
    ///
    /// Admin sessions get a reload scheduled right after the logout request
    /// resolves and another on every load of the hidden frame.
    pub async fn logout(&self) {
        let response: LogoutResponse = match self.api.get(LOGOUT_PATH).await {
            Ok(response) => response,
            Err(e) => {
                log_action_failed(LogOperation::Logout, &e);
                return;
            }
        };

        log_logout(response.admin, &response.logout_path);
        if response.admin {
            let effects = Rc::clone(&self.effects);
            self.effects.submit_hidden_form(
                &response.logout_path,
                Rc::new(move || effects.schedule_reload(RELOAD_DELAY)),
            );
        }
        self.effects.schedule_reload(RELOAD_DELAY);
    }

    /// Open the token request page of the identity provider in a new context.
    pub async fn configure_client(&self) {
        match self.api.get::<ConfigureResponse>(CONFIGURE_PATH).await {
            Ok(ConfigureResponse { token_endpoint }) => {
                let url = format!("{}/request", token_endpoint);
                self.open(LogOperation::ConfigureClient, &url, WindowTarget::NewContext);
            }
            Err(e) => log_action_failed(LogOperation::ConfigureClient, &e),
        }
    }

    /// Switch to the cluster console, appending `search` to its URL.
    pub async fn launch_to_console(&self, search: &str) {
        match self.api.get::<ConsolePublicResponse>(CONSOLE_PUBLIC_PATH).await {
            Ok(response) => {
                let url = format!("{}{}", response.data.console_url, search);
                self.open(LogOperation::LaunchConsole, &url, WindowTarget::SameContext);
            }
            Err(e) => log_action_failed(LogOperation::LaunchConsole, &e),
        }
    }

    /// Open a URL through the same effects as the actions (sidebar links, docs)
    pub fn open(&self, operation: LogOperation, url: &str, target: WindowTarget) {
        log_window_opened(operation, url, target.as_str());
        self.effects.open_window(url, target);
    }
}
