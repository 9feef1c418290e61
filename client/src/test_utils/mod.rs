//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//! - The realtime mock needs a real channel, which mockall can't express

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
