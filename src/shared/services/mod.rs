// Shared services
pub mod api_service;
pub mod effects;
pub mod session;
pub mod transport;

pub use api_service::ApiService;
pub use effects::{BrowserEffects, DefaultEffects, WindowTarget};
pub use session::SessionActions;
pub use transport::{DefaultTransport, HttpResponse, JsonTransport};
