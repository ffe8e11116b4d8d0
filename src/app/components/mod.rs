pub mod about_menu;
pub mod common;
pub mod perspective_switcher;
pub mod user_menu;

pub use about_menu::{AboutMenu, AboutModal, AboutModalVersion};
pub use common::{Dropdown, DropdownItem, Modal, Spinner};
pub use perspective_switcher::PerspectiveSwitcher;
pub use user_menu::{DropdownName, UserMenu};
