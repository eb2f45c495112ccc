use super::ClientMessage;
use mc_cards::Attribute;
use mc_core::ID;
use mc_gameplay::GameError;
use mc_gameplay::Player;

/// Boundary between wire strings and engine types.
///
/// Everything a client sends arrives as text; this is the single place
/// where it becomes typed. Unknown attributes and malformed ids are
/// rejected here, before they can reach a lobby.
pub struct Protocol;

impl Protocol {
    /// Parses an inbound JSON frame into a request.
    pub fn decode(s: &str) -> serde_json::Result<ClientMessage> {
        serde_json::from_str(s)
    }
    /// Resolves an attribute name against the fixed attribute set.
    pub fn attr(s: &str) -> Result<Attribute, GameError> {
        Attribute::try_from(s).map_err(|_| GameError::UnknownAttribute(s.to_string()))
    }
    /// Parses a player id token.
    pub fn player(s: &str) -> Result<ID<Player>, GameError> {
        s.parse().map_err(|_| GameError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_valid_request() {
        assert!(Protocol::decode(r#"{"type":"add_bot","lobbyId":"AB2CD"}"#).is_ok());
        assert!(Protocol::decode(r#"{"type":"start_game","lobbyId":"AB2CD"}"#).is_ok());
    }
    #[test]
    fn decode_invalid_request() {
        assert!(Protocol::decode("not json").is_err());
        assert!(Protocol::decode(r#"{"type":"shuffle"}"#).is_err());
        assert!(Protocol::decode(r#"{"type":"add_bot"}"#).is_err()); // missing lobby
    }
    #[test]
    fn attr_accepts_the_fixed_set() {
        for name in ["rank", "strength", "speed", "iq"] {
            assert!(Protocol::attr(name).is_ok());
        }
    }
    #[test]
    fn attr_rejects_everything_else() {
        assert_eq!(
            Protocol::attr("luck"),
            Err(GameError::UnknownAttribute("luck".into()))
        );
    }
    #[test]
    fn player_parses_only_real_ids() {
        let id = ID::<Player>::default();
        assert_eq!(Protocol::player(&id.to_string()), Ok(id));
        assert_eq!(Protocol::player("nope"), Err(GameError::NotFound));
    }
}
