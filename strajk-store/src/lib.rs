pub mod app_config;
pub mod session;

pub use app_config::Config;
pub use session::{InMemorySessionStore, SessionStore, CONFIRMATION_KEY};
