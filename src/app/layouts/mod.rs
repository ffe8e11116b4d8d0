pub mod global_sidebar;
pub mod header_shell;
pub mod navbar;

pub use global_sidebar::GlobalSidebar;
pub use header_shell::AcmHeader;
pub use navbar::Navbar;
