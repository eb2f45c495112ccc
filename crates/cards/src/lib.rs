//! Themed battle card representation.
//!
//! A card is an immutable record generated by the supply for a lobby's theme:
//! a display name, an image URL, and a stat line over the fixed attribute set.
//!
//! - [`Attribute`] — The closed set of comparable attributes
//! - [`Stats`] — One value per attribute, 1..=99
//! - [`Card`] — A single generated card
//! - [`Deck`] — The ordered card sequence dealt at game start
mod attribute;
mod card;
mod deck;
mod stats;

pub use attribute::*;
pub use card::*;
pub use deck::*;
pub use stats::*;
