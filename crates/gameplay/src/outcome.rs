use super::Player;
use mc_cards::Attribute;
use mc_cards::Card;
use mc_core::ID;
use mc_core::Position;

/// Result of one attribute comparison. Ephemeral: only the most recent
/// outcome is ever held, and only long enough to broadcast.
///
/// `reveals` is seat-aligned; a `None` marks a seat that contributed no
/// card (already eliminated). The revealed cards are clones taken before
/// capture, so the outcome stays coherent after hands mutate.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub attribute: Attribute,
    pub reveals: Vec<Option<Card>>,
    pub winner: ID<Player>,
    pub seat: Position,
}
