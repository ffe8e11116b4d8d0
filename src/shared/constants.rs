use std::time::Duration;

// Console API endpoints
pub const USERNAME_PATH: &str = "/multicloud/common/username";
pub const VERSION_PATH: &str = "/multicloud/common/version";
pub const CONFIGURE_PATH: &str = "/multicloud/common/configure";
pub const LOGOUT_PATH: &str = "/multicloud/logout";
pub const CONSOLE_PUBLIC_PATH: &str =
    "/multicloud/api/v1/namespaces/openshift-config-managed/configmaps/console-public";

/// Displayed until the username endpoint answers (and kept on failure)
pub const USERNAME_FALLBACK: &str = "";
/// Sentinel rendered as a spinner in the about modal
pub const VERSION_FALLBACK: &str = "undefined";

/// Delay before the full page reload that follows a logout
pub const RELOAD_DELAY: Duration = Duration::from_millis(500);

/// Name shared by the hidden logout frame and the form targeting it
pub const HIDDEN_FRAME_NAME: &str = "hidden-form";

pub const DOCUMENTATION_URL: &str = "https://access.redhat.com/documentation/en-us/red_hat_advanced_cluster_management_for_kubernetes/2.2/";

pub const PRODUCT_NAME: &str = "Advanced Cluster Management";
