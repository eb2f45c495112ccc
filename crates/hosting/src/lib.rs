//! Lobby registry and WebSocket gateway.
//!
//! [`Arcade`] is the process-wide map from lobby code to live [`Session`],
//! plus the per-connection bridge that turns WebSocket frames into lobby
//! operations and drains broadcasts back out.
//!
//! [`Session`]: mc_gameroom::Session
mod arcade;

pub use arcade::*;
