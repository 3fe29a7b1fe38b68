pub mod handlers;
pub mod page;
pub mod server;
pub mod session;

pub use server::{build_router, start, AppState, ServerConfig, ServerHandle};
pub use session::{SessionConfig, SessionStore};
