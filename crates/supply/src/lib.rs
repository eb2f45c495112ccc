//! Card supply collaborator boundary.
//!
//! The engine never fetches theme content itself; it asks a [`Supply`] for an
//! ordered deck and guards the call with a bounded timeout. Any failure mode
//! (error, timeout, short deck, duplicate ids) degrades to [`Synthetic`]
//! placeholders so a game can always start.
mod synthetic;

pub use synthetic::*;

use mc_cards::Deck;
use mc_core::SUPPLY_TIMEOUT;

/// Upstream source of themed card decks.
///
/// Implementations may call remote character APIs, read fixtures, or
/// generate procedurally. The contract required by the engine — exactly
/// `count` cards with unique ids — is enforced by [`catalog`], not by
/// implementors.
#[async_trait::async_trait]
pub trait Supply: Send + Sync {
    async fn generate(&self, theme: &str, count: usize) -> anyhow::Result<Deck>;
}

/// Requests a deck from the supply under [`SUPPLY_TIMEOUT`].
///
/// Returns exactly `count` cards with unique ids, falling back to
/// [`Synthetic`] placeholders on timeout, error, or a malformed deck.
/// Upstream unavailability is logged, never surfaced to the caller.
pub async fn catalog(supply: &dyn Supply, theme: &str, count: usize) -> Deck {
    match tokio::time::timeout(SUPPLY_TIMEOUT, supply.generate(theme, count)).await {
        Ok(Ok(deck)) if deck.len() == count && deck.distinct() => deck,
        Ok(Ok(deck)) => {
            log::warn!(
                "supply returned a malformed deck ({} cards for {}), using placeholders",
                deck.len(),
                count
            );
            Synthetic.placeholders(theme, count)
        }
        Ok(Err(e)) => {
            log::warn!("supply unavailable ({}), using placeholders", e);
            Synthetic.placeholders(theme, count)
        }
        Err(_) => {
            log::warn!(
                "supply timed out after {:?}, using placeholders",
                SUPPLY_TIMEOUT
            );
            Synthetic.placeholders(theme, count)
        }
    }
}
