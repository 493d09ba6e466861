mod session_service;

pub use session_service::{SessionService, SessionServiceError, DEFAULT_INTEREST_RATE};
