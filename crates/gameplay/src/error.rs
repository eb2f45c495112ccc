/// Failure taxonomy for lobby operations.
///
/// Every variant is returned to the originating caller only; none of them
/// crash a lobby or leak to other players. `EmptyHand` is the exception in
/// severity: it marks an unreachable state (see the hand-size invariant in
/// `Lobby::choose`) and force-finishes the lobby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation not valid for the lobby's current phase.
    InvalidState,
    /// Caller is not the player at the current turn index.
    NotYourTurn,
    /// All seats are taken.
    LobbyFull,
    /// Fewer than the minimum seats filled at start.
    NotEnoughPlayers,
    /// Unknown lobby code or player id.
    NotFound,
    /// Another connected player already uses this name.
    NameTaken,
    /// Attribute string not in the fixed attribute set.
    UnknownAttribute(String),
    /// A hand was empty at comparison time. Fatal for the lobby.
    EmptyHand,
    /// Code generation exhausted its retry budget.
    DuplicateId,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidState => write!(f, "operation not valid in this lobby state"),
            Self::NotYourTurn => write!(f, "not your turn"),
            Self::LobbyFull => write!(f, "lobby is full"),
            Self::NotEnoughPlayers => write!(f, "need at least two players to start"),
            Self::NotFound => write!(f, "lobby not found"),
            Self::NameTaken => write!(f, "name already taken"),
            Self::UnknownAttribute(s) => write!(f, "unknown attribute: {}", s),
            Self::EmptyHand => write!(f, "empty hand at comparison"),
            Self::DuplicateId => write!(f, "could not allocate a unique lobby code"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn display_is_client_facing() {
        assert_eq!(GameError::NotYourTurn.to_string(), "not your turn");
        assert_eq!(
            GameError::UnknownAttribute("luck".into()).to_string(),
            "unknown attribute: luck"
        );
    }
}
