//! Framez client
//!
//! A headless client for the Framez social feed. The embedding application
//! drives screens through the services in [`app`]; all backend access goes
//! through the port traits in [`domain::ports`], implemented for the managed
//! backend in [`adapters`]. Hexagonal (ports & adapters) architecture keeps
//! the feed logic testable without a network.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;
