pub mod constants;
pub mod errors;
pub mod logging;
pub mod services;

// Dioxus hooks wrapping the state units
pub mod hooks;
