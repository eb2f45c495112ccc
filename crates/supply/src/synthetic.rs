use super::Supply;
use mc_cards::Card;
use mc_cards::Deck;
use mc_cards::Stats;
use mc_core::StatValue;
use rand::Rng;
use std::collections::HashSet;

/// Procedural placeholder generator.
///
/// Names cards `"{theme} #n"`, points images at a seeded placeholder
/// service, and derives stats from the name and theme lengths plus a
/// bounded random variance. Always succeeds, which makes it the terminal
/// fallback for every other supply.
pub struct Synthetic;

impl Synthetic {
    /// Generate `count` placeholder cards for a theme. Infallible.
    pub fn placeholders(&self, theme: &str, count: usize) -> Deck {
        let ref mut rng = rand::rng();
        let mut ids = HashSet::new();
        Deck::new(
            (0..count)
                .map(|i| {
                    let name = format!("{} #{}", theme, i + 1);
                    let image = format!(
                        "https://picsum.photos/seed/{}-{}/320/420",
                        Self::slug(theme),
                        i
                    );
                    let stats = Self::plausible(&name, theme, rng);
                    let id = Self::fresh(&mut ids, rng);
                    Card::new(id, name, image, stats)
                })
                .collect(),
        )
    }
    /// Stat line derived from name and theme lengths with random variance,
    /// folded into 1..=99.
    fn plausible(name: &str, theme: &str, rng: &mut impl Rng) -> Stats {
        let base = (name.len() * theme.len()) % 90 + 10;
        Stats::from(std::array::from_fn(|_| {
            let variance = rng.random_range(0..20);
            ((base + variance) % 99 + 1) as StatValue
        }))
    }
    /// Card id unique within this deck.
    fn fresh(ids: &mut HashSet<String>, rng: &mut impl Rng) -> String {
        loop {
            let id = format!("{:08X}", rng.random::<u32>());
            if ids.insert(id.clone()) {
                return id;
            }
        }
    }
    /// URL-safe theme seed.
    fn slug(theme: &str) -> String {
        theme
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect()
    }
}

#[async_trait::async_trait]
impl Supply for Synthetic {
    async fn generate(&self, theme: &str, count: usize) -> anyhow::Result<Deck> {
        Ok(self.placeholders(theme, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_cards::Attribute;
    #[test]
    fn placeholders_fill_the_request() {
        let deck = Synthetic.placeholders("One Piece", 24);
        assert_eq!(deck.len(), 24);
        assert!(deck.distinct());
    }
    #[test]
    fn placeholders_are_themed_and_bounded() {
        let deck = Synthetic.placeholders("Naruto", 6);
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.name, format!("Naruto #{}", i + 1));
            assert!(card.stats.bounded());
            assert!(!card.image.contains(' '));
        }
    }
    #[test]
    fn empty_theme_still_generates() {
        let deck = Synthetic.placeholders("", 4);
        assert_eq!(deck.len(), 4);
        for card in deck.cards() {
            for attr in Attribute::ALL {
                assert!(card.stats.get(attr) >= 1);
            }
        }
    }
}
