use mc_cards::Attribute;
use mc_cards::Card;
use mc_core::Position;
use mc_core::Unique;
use mc_core::Wins;
use mc_gameplay::Lobby;
use mc_gameplay::Phase;
use mc_gameplay::Player;
use mc_gameplay::RoundOutcome;
use serde::Deserialize;
use serde::Serialize;

/// Requests sent from client to server over WebSocket.
///
/// Every operation names its target lobby; one connection can create,
/// join, and play over a single socket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    CreateLobby {
        name: String,
        theme: String,
    },
    JoinLobby {
        lobby_id: String,
        name: String,
    },
    AddBot {
        lobby_id: String,
    },
    StartGame {
        lobby_id: String,
    },
    ChooseAttribute {
        lobby_id: String,
        player_id: String,
        attr: String,
    },
}

/// Messages sent from server to client over WebSocket.
///
/// Acks answer the caller only — errors never reach other players. The
/// broadcast variants carry the full post-operation snapshot so clients
/// never have to infer state transitions.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// Initial handshake: tells the client which connection id is theirs,
    /// so it can recognize its own seat in snapshots.
    Connected { socket_id: String },
    /// Outcome acknowledgment for the caller's last request.
    Ack {
        ok: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        lobby: Option<LobbyView>,
        #[serde(skip_serializing_if = "Option::is_none")]
        err: Option<String>,
    },
    /// Membership changed outside a round.
    LobbyUpdate { lobby: LobbyView },
    /// Cards are dealt; the game is live.
    GameStarted { lobby: LobbyView },
    /// One round resolved: the attribute, the reveals, and who took it.
    RoundResult {
        attr: Attribute,
        winner_id: String,
        reveals: Vec<Option<Card>>,
        lobby: LobbyView,
    },
}

impl ServerMessage {
    pub fn connected(connection: mc_core::ID<mc_core::Connection>) -> Self {
        Self::Connected {
            socket_id: connection.to_string(),
        }
    }
    pub fn ok(lobby: LobbyView) -> Self {
        Self::Ack {
            ok: true,
            lobby: Some(lobby),
            err: None,
        }
    }
    pub fn err(err: String) -> Self {
        Self::Ack {
            ok: false,
            lobby: None,
            err: Some(err),
        }
    }
    pub fn lobby_update(lobby: LobbyView) -> Self {
        Self::LobbyUpdate { lobby }
    }
    pub fn game_started(lobby: LobbyView) -> Self {
        Self::GameStarted { lobby }
    }
    pub fn round_result(outcome: &RoundOutcome, lobby: LobbyView) -> Self {
        Self::RoundResult {
            attr: outcome.attribute,
            winner_id: outcome.winner.to_string(),
            reveals: outcome.reveals.clone(),
            lobby,
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

/// Client-facing lobby snapshot. Field names follow the web client
/// contract, so they are camelCase on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyView {
    pub id: String,
    pub theme: String,
    pub state: Phase,
    pub players: Vec<PlayerView>,
    pub current_player_index: Position,
    pub round: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerView>,
}

/// One seat in a snapshot. The transport ref surfaces as `socketId` so a
/// client can recognize its own seat.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: String,
    pub name: String,
    pub is_bot: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<String>,
    pub hand: Vec<Card>,
    pub total_wins: Wins,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().to_string(),
            name: player.name().to_string(),
            is_bot: player.is_bot(),
            socket_id: player.connection().map(|c| c.to_string()),
            hand: player.hand().iter().cloned().collect(),
            total_wins: player.wins(),
        }
    }
}

impl From<&Lobby> for LobbyView {
    fn from(lobby: &Lobby) -> Self {
        Self {
            id: lobby.code().to_string(),
            theme: lobby.theme().to_string(),
            state: lobby.phase(),
            players: lobby.players().iter().map(PlayerView::from).collect(),
            current_player_index: lobby.current(),
            round: lobby.round(),
            winner: lobby.winner().map(PlayerView::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> LobbyView {
        let mut lobby = Lobby::new("AB2CD".into(), "Test".into());
        lobby.join("Ada", None).unwrap();
        lobby.add_bot().unwrap();
        LobbyView::from(&lobby)
    }

    #[test]
    fn client_messages_parse_the_wire_shape() {
        let msg = r#"{"type":"join_lobby","lobbyId":"AB2CD","name":"Ada"}"#;
        match serde_json::from_str::<ClientMessage>(msg) {
            Ok(ClientMessage::JoinLobby { lobby_id, name }) => {
                assert_eq!(lobby_id, "AB2CD");
                assert_eq!(name, "Ada");
            }
            other => panic!("unexpected parse: {:?}", other),
        }
        let msg = r#"{"type":"choose_attribute","lobbyId":"AB2CD","playerId":"x","attr":"iq"}"#;
        assert!(matches!(
            serde_json::from_str::<ClientMessage>(msg),
            Ok(ClientMessage::ChooseAttribute { .. })
        ));
    }
    #[test]
    fn snapshots_use_client_field_names() {
        let json = serde_json::to_value(ServerMessage::lobby_update(view())).unwrap();
        assert_eq!(json["type"], "lobby_update");
        assert_eq!(json["lobby"]["state"], "waiting");
        assert_eq!(json["lobby"]["currentPlayerIndex"], 0);
        assert_eq!(json["lobby"]["players"][0]["isBot"], false);
        assert_eq!(json["lobby"]["players"][1]["isBot"], true);
        assert_eq!(json["lobby"]["players"][0]["totalWins"], 0);
    }
    #[test]
    fn error_acks_carry_no_lobby() {
        let json = serde_json::to_value(ServerMessage::err("not your turn".into())).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["err"], "not your turn");
        assert!(json.get("lobby").is_none());
    }
    #[test]
    fn success_acks_carry_the_snapshot() {
        let json = serde_json::to_value(ServerMessage::ok(view())).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["lobby"]["id"], "AB2CD");
        assert!(json.get("err").is_none());
    }
}
