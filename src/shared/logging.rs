//! Structured logging for the console header
//!
//! Every fetch site and session action reports through these helpers so the
//! diagnostic channel carries consistent operation names and fields.

use crate::shared::errors::FetchError;

/// Operation names attached to every log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Fetch,
    Navigation,
    Logout,
    ConfigureClient,
    LaunchConsole,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Fetch => "fetch",
            LogOperation::Navigation => "navigation",
            LogOperation::Logout => "logout",
            LogOperation::ConfigureClient => "configure_client",
            LogOperation::LaunchConsole => "launch_console",
        }
    }
}

/// Log a request leaving for the console API
pub fn log_fetch_start(url: &str) {
    tracing::debug!(
        operation = LogOperation::Fetch.as_str(),
        url = url,
        "Fetching console API"
    );
}

/// Log a failed request that was replaced by its fallback value
pub fn log_fetch_fallback(url: &str, error: &FetchError) {
    tracing::error!(
        operation = LogOperation::Fetch.as_str(),
        url = url,
        error = %error,
        "Fetch failed, using fallback value"
    );
}

/// Log the navigation state seeded from the current path
pub fn log_route_resolved(path: &str, group_id: &str, item_id: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        group_id = group_id,
        item_id = item_id,
        matched = !item_id.is_empty(),
        "Resolved active route"
    );
}

/// Log a session action whose request failed (the action is dropped)
pub fn log_action_failed(operation: LogOperation, error: &FetchError) {
    tracing::error!(
        operation = operation.as_str(),
        error = %error,
        "Session action aborted"
    );
}

/// Log the logout branch taken
pub fn log_logout(admin: bool, logout_path: &str) {
    tracing::info!(
        operation = LogOperation::Logout.as_str(),
        admin = admin,
        logout_path = logout_path,
        "Logging out"
    );
}

/// Log a browser context opened by a session action
pub fn log_window_opened(operation: LogOperation, url: &str, target: &str) {
    tracing::info!(
        operation = operation.as_str(),
        url = url,
        target = target,
        "Opening browser context"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Fetch.as_str(), "fetch");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Logout.as_str(), "logout");
        assert_eq!(LogOperation::ConfigureClient.as_str(), "configure_client");
        assert_eq!(LogOperation::LaunchConsole.as_str(), "launch_console");
    }
}
