use mc_cards::Attribute;
use mc_cards::Card;
use mc_gameroom::Chooser;
use rand::seq::IndexedRandom;

/// Example chooser that picks an attribute uniformly at random.
/// Useful for simulation and for exercising resolution paths in tests.
pub struct Fish;

impl Chooser for Fish {
    fn choose(&self, _: &Card) -> Attribute {
        *Attribute::ALL
            .choose(&mut rand::rng())
            .expect("non empty attribute set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_cards::Stats;
    #[test]
    fn always_returns_a_member_of_the_set() {
        let card = Card::new("A".into(), "A".into(), String::new(), Stats::from([1; 4]));
        for _ in 0..50 {
            assert!(Attribute::ALL.contains(&Fish.choose(&card)));
        }
    }
}
