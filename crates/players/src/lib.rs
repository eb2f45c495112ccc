//! Chooser implementations for bot seats.
//!
//! Concrete types implementing the `Chooser` trait from [`mc_gameroom`],
//! providing different attribute-selection behaviors.
//!
//! ## Implementations
//!
//! - [`Greedy`] — Plays the front card's strongest attribute (the live bot)
//! - [`Fish`] — Random attribute, for testing and simulation
mod fish;
mod greedy;

pub use fish::*;
pub use greedy::*;
