pub mod console_routes;

pub use console_routes::{App, Route};
