// Public API exports (shared between web and native targets)
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus components, layouts and routes
pub mod app;
