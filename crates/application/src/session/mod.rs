//! Session lifecycle.
//!
//! This module provides:
//! - The session store: login, register, restore, logout
//! - The credential source the gateway reads the bearer token from

mod store;

pub use store::SessionStore;
