use mc_cards::Attribute;
use mc_cards::Card;

/// Strategy seam for players who decide without a transport.
///
/// Given the front card about to be played, name the attribute to battle
/// on. Selection is a pure function of the card, so the session can drive
/// bot turns inline under the lobby lock without awaiting anything.
pub trait Chooser: Send + Sync {
    fn choose(&self, card: &Card) -> Attribute;
}
