use super::Stats;
use mc_core::Arbitrary;

/// A single themed battle card. Immutable once generated.
///
/// The id is an opaque token unique within one deck; the supply is
/// responsible for uniqueness, the engine only ever compares and moves
/// cards whole.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub image: String,
    pub stats: Stats,
}

impl Card {
    pub fn new(id: String, name: String, image: String, stats: Stats) -> Self {
        Self {
            id,
            name,
            image,
            stats,
        }
    }
    /// Generate an opaque card id: 8 uppercase hex characters.
    pub fn token() -> String {
        use rand::Rng;
        format!("{:08X}", rand::rng().random::<u32>())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.id)
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        let token = Self::token();
        Self {
            name: format!("Card {}", token),
            image: format!("https://picsum.photos/seed/{}/320/420", token),
            stats: Stats::random(),
            id: token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn token_shape() {
        let token = Card::token();
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
    #[test]
    fn random_card_is_coherent() {
        let card = Card::random();
        assert!(!card.name.is_empty());
        assert!(card.stats.bounded());
    }
}
