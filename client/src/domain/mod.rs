//! Domain layer
//!
//! Contains pure domain types with no backend dependencies.
//! - `entities`: posts, profiles, sessions, feed scopes
//! - `ports`: trait definitions for the managed backend's capabilities

pub mod entities;
pub mod ports;
