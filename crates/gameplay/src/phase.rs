/// Lobby lifecycle. Transitions are strictly forward; a finished lobby is
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Waiting,
    Playing,
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Playing => write!(f, "playing"),
            Self::Finished => write!(f, "finished"),
        }
    }
}
