/// One of the four battle attributes every card carries a value for.
///
/// The set is closed: every generated card has a stat for each attribute,
/// so any `Attribute` is a valid comparison key for any card. Unrecognized
/// wire strings are rejected at the protocol boundary before they reach
/// the engine.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Rank,
    Strength,
    Speed,
    Iq,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Self; 4] = [Self::Rank, Self::Strength, Self::Speed, Self::Iq];
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rank => write!(f, "rank"),
            Self::Strength => write!(f, "strength"),
            Self::Speed => write!(f, "speed"),
            Self::Iq => write!(f, "iq"),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Attribute {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "rank" => Ok(Self::Rank),
            "strength" => Ok(Self::Strength),
            "speed" => Ok(Self::Speed),
            "iq" => Ok(Self::Iq),
            _ => Err(anyhow::anyhow!("unknown attribute: {}", s)),
        }
    }
}

impl mc_core::Arbitrary for Attribute {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        *Self::ALL
            .choose(&mut rand::rng())
            .expect("non empty attribute set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn display_parse_roundtrip() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::try_from(attr.to_string().as_str()).ok(), Some(attr));
        }
    }
    #[test]
    fn rejects_unknown() {
        assert!(Attribute::try_from("luck").is_err());
        assert!(Attribute::try_from("").is_err());
        assert!(Attribute::try_from("RANK").is_err());
    }
}
