//! Lobby state machine: seating, turn order, round resolution, win detection.
//!
//! This is the functional core of the engine. Everything here is pure and
//! synchronous; the async shell in `mc-gameroom` owns a [`Lobby`] behind a
//! per-lobby lock and drives it, so each operation is atomic with respect to
//! turn validation.
//!
//! ## State
//!
//! - [`Lobby`] — One game session: seats, phase, turn index, round counter
//! - [`Player`] — A seat: identity, hand, win tally, transport ref
//! - [`Phase`] — Waiting → Playing → Finished, strictly forward
//!
//! ## Resolution
//!
//! - [`RoundOutcome`] — Reveals and winner of one attribute comparison
//! - [`deal`] — Contiguous-block deck partition at game start
//!
//! ## Errors
//!
//! - [`GameError`] — Caller-facing failure taxonomy
mod dealer;
mod error;
mod lobby;
mod outcome;
mod phase;
mod player;

pub use dealer::*;
pub use error::*;
pub use lobby::*;
pub use outcome::*;
pub use phase::*;
pub use player::*;
