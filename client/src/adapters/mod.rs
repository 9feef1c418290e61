//! Adapters layer
//!
//! Implementations of port traits against the managed backend's HTTP and
//! websocket surfaces.

pub mod realtime;
pub mod rest;

pub use realtime::WsRealtimeGateway;
pub use rest::{
    RestAuthGateway, RestClient, RestMediaStore, RestPostRepository, RestProfileRepository,
};
