// Domain state units
// Pure Rust, no framework dependencies

pub mod models;
pub mod navigation;
pub mod navigation_state;
pub mod toggles;

pub use models::{
    ConfigureResponse, ConsolePublicData, ConsolePublicResponse, LogoutResponse, RemoteValue,
    UsernameResponse, VersionResponse,
};
pub use navigation::{resolve_active_route, sidebar_tree, ActiveRoute, NavNode, RouteEntry, NAV_CATALOG};
pub use navigation_state::NavigationState;
pub use toggles::{HeaderToggle, HeaderToggles, ToggleState};
