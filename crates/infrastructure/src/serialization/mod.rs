//! Deterministic JSON for the session file.

mod json;

pub use json::*;
