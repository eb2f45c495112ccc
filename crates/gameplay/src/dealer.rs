use mc_cards::Card;
use mc_cards::Deck;
use std::collections::VecDeque;

/// Splits a deck into one hand per seat: contiguous blocks of
/// `deck.len() / seats` cards, in seating order.
///
/// Pure and deterministic: the same deck and seat count always produce the
/// same partition, and the union of all hands is exactly the input. Callers
/// guarantee the deck length is a positive multiple of `seats`.
pub fn deal(deck: Deck, seats: usize) -> Vec<VecDeque<Card>> {
    debug_assert!(seats > 0);
    debug_assert_eq!(deck.len() % seats, 0);
    let size = deck.len() / seats;
    let mut hands = vec![VecDeque::with_capacity(size); seats];
    for (i, card) in deck.into_iter().enumerate() {
        hands[i / size].push_back(card);
    }
    hands
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_cards::Stats;
    use std::collections::HashSet;

    fn deck(n: usize) -> Deck {
        Deck::new(
            (0..n)
                .map(|i| {
                    Card::new(
                        format!("C{}", i),
                        format!("Card {}", i),
                        String::new(),
                        Stats::from([1, 2, 3, 4]),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn partition_is_complete_and_equal() {
        let hands = deal(deck(24), 4);
        assert_eq!(hands.len(), 4);
        assert!(hands.iter().all(|h| h.len() == 6));
        let ids = hands
            .iter()
            .flatten()
            .map(|c| c.id.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 24);
    }
    #[test]
    fn partition_is_contiguous_in_seating_order() {
        let hands = deal(deck(6), 2);
        let first = hands[0].iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
        let second = hands[1].iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
        assert_eq!(first, vec!["C0", "C1", "C2"]);
        assert_eq!(second, vec!["C3", "C4", "C5"]);
    }
    #[test]
    fn partition_is_deterministic() {
        let a = deal(deck(12), 3);
        let b = deal(deck(12), 3);
        assert_eq!(a, b);
    }
}
