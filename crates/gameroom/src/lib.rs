//! Async runtime for live lobbies.
//!
//! This crate is the imperative shell around the pure engine in
//! `mc-gameplay`: it owns each lobby behind a per-lobby lock, converts
//! between wire messages and engine calls, fans state out to connections,
//! and plays bot turns inline so a game never waits on a player that
//! cannot answer.
//!
//! ## Architecture
//!
//! - [`Session`] — Per-lobby coordinator: lock, broadcast, bot driver
//! - [`Table`] — Connection fanout: unicast acks, broadcast snapshots
//! - [`Protocol`] — Wire string ↔ engine type boundary
//! - [`Chooser`] — Strategy seam for players without a transport
//!
//! ## Messages
//!
//! - [`ClientMessage`] — Requests from clients
//! - [`ServerMessage`] — Acks and broadcasts to clients
//! - [`LobbyView`] — Client-facing lobby snapshot
mod chooser;
mod message;
mod protocol;
mod session;
mod table;

pub use chooser::*;
pub use message::*;
pub use protocol::*;
pub use session::*;
pub use table::*;
