use super::Attribute;
use mc_core::Arbitrary;
use mc_core::STAT_MAX;
use mc_core::STAT_MIN;
use mc_core::StatValue;

/// A card's stat line: one value per attribute, each in 1..=99.
///
/// Stored as named fields rather than a map so the attribute set stays
/// closed at compile time; serializes as an object keyed by attribute name,
/// which is what the client iterates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    pub rank: StatValue,
    pub strength: StatValue,
    pub speed: StatValue,
    pub iq: StatValue,
}

impl Stats {
    /// Value for the given attribute.
    pub fn get(&self, attribute: Attribute) -> StatValue {
        match attribute {
            Attribute::Rank => self.rank,
            Attribute::Strength => self.strength,
            Attribute::Speed => self.speed,
            Attribute::Iq => self.iq,
        }
    }
    /// The attribute this stat line scores highest on.
    /// Ties resolve to the earliest attribute in canonical order.
    pub fn best(&self) -> Attribute {
        Attribute::ALL
            .into_iter()
            .fold(None::<(Attribute, StatValue)>, |best, attr| match best {
                Some((_, top)) if self.get(attr) <= top => best,
                _ => Some((attr, self.get(attr))),
            })
            .map(|(attr, _)| attr)
            .expect("non empty attribute set")
    }
    /// True when every value sits inside the legal 1..=99 range.
    pub fn bounded(&self) -> bool {
        Attribute::ALL
            .into_iter()
            .all(|a| (STAT_MIN..=STAT_MAX).contains(&self.get(a)))
    }
}

/// [StatValue; 4] isomorphism, in canonical attribute order.
impl From<[StatValue; 4]> for Stats {
    fn from([rank, strength, speed, iq]: [StatValue; 4]) -> Self {
        Self {
            rank,
            strength,
            speed,
            iq,
        }
    }
}

impl Arbitrary for Stats {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self::from(std::array::from_fn(|_| {
            rng.random_range(STAT_MIN..=STAT_MAX)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn get_reads_each_field() {
        let stats = Stats::from([10, 20, 30, 40]);
        assert_eq!(stats.get(Attribute::Rank), 10);
        assert_eq!(stats.get(Attribute::Strength), 20);
        assert_eq!(stats.get(Attribute::Speed), 30);
        assert_eq!(stats.get(Attribute::Iq), 40);
    }
    #[test]
    fn best_picks_maximum() {
        let stats = Stats::from([10, 99, 30, 40]);
        assert_eq!(stats.best(), Attribute::Strength);
    }
    #[test]
    fn best_breaks_ties_in_canonical_order() {
        let stats = Stats::from([50, 50, 50, 50]);
        assert_eq!(stats.best(), Attribute::Rank);
        let stats = Stats::from([10, 50, 50, 10]);
        assert_eq!(stats.best(), Attribute::Strength);
    }
    #[test]
    fn random_stats_are_bounded() {
        for _ in 0..100 {
            assert!(Stats::random().bounded());
        }
    }
    #[test]
    fn serializes_as_attribute_keyed_object() {
        let stats = Stats::from([1, 2, 3, 4]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["rank"], 1);
        assert_eq!(json["iq"], 4);
    }
}
