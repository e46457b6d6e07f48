//! Authentication and session types.

mod session;
mod types;

pub use session::{Session, SessionStatus};
pub use types::{AuthResponse, AuthToken, Credentials, CurrentUserResponse, Registration};
