//! Realtime adapter
//!
//! Websocket implementation of the realtime port.

pub mod gateway;

pub use gateway::WsRealtimeGateway;
