// Custom Dioxus hooks
pub mod use_header_toggles;
pub mod use_navigation;
pub mod use_remote_value;
pub mod use_session_actions;

pub use use_header_toggles::use_header_toggles;
pub use use_navigation::use_navigation;
pub use use_remote_value::use_remote_value;
pub use use_session_actions::{spawn_action, use_session_actions};
