use mc_cards::Attribute;
use mc_cards::Card;
use mc_gameroom::Chooser;

/// Plays the attribute its own front card scores highest on.
///
/// A locally greedy heuristic: it never looks at opponents or history.
/// Ties between equal stats fall to canonical attribute order, keeping
/// bot play deterministic for a given deal.
pub struct Greedy;

impl Chooser for Greedy {
    fn choose(&self, card: &Card) -> Attribute {
        card.stats.best()
    }
}
