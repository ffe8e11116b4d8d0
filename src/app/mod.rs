pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the console App
pub use pages::console_routes::App;
