pub mod request_state;
pub mod user_session;

// Re-export commonly used types
pub use request_state::{RequestFlags, RequestState};
pub use user_session::UserSession;
