use mc_core::CODE_ALPHABET;
use mc_core::CODE_LENGTH;
use mc_core::CODE_RETRY_BUDGET;
use mc_core::Connection;
use mc_core::ID;
use mc_gameplay::GameError;
use mc_gameplay::Lobby;
use mc_gameroom::Chooser;
use mc_gameroom::ClientMessage;
use mc_gameroom::LobbyView;
use mc_gameroom::Protocol;
use mc_gameroom::ServerMessage;
use mc_gameroom::Session;
use mc_players::Greedy;
use mc_supply::Supply;
use mc_supply::Synthetic;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Manages active lobbies and their lifecycles.
///
/// The registry map has its own lock, independent of any per-lobby lock:
/// inserts and removals serialize here, while operations on two different
/// lobbies run concurrently. Guards are dropped before any session work,
/// so a slow lobby never blocks the registry.
pub struct Arcade {
    lobbies: RwLock<HashMap<String, Arc<Session>>>,
    supply: Arc<dyn Supply>,
    bot: Arc<dyn Chooser>,
}

impl Arcade {
    pub fn new(supply: Arc<dyn Supply>) -> Self {
        Self {
            lobbies: RwLock::new(HashMap::new()),
            supply,
            bot: Arc::new(Greedy),
        }
    }
    /// Number of live lobbies.
    pub async fn count(&self) -> usize {
        self.lobbies.read().await.len()
    }
    /// Opens a lobby under a fresh code and seats the host.
    pub async fn create(
        &self,
        host: &str,
        theme: &str,
        connection: ID<Connection>,
        sender: UnboundedSender<ServerMessage>,
    ) -> Result<(String, LobbyView), GameError> {
        let mut lobbies = self.lobbies.write().await;
        let code = Self::code(&lobbies)?;
        let session = Arc::new(Session::new(
            Lobby::new(code.clone(), theme.to_string()),
            self.supply.clone(),
            self.bot.clone(),
        ));
        lobbies.insert(code.clone(), session.clone());
        drop(lobbies);
        log::info!("[arcade] lobby {} opened for {}", code, host);
        let view = session.join(host, connection, sender).await?;
        Ok((code, view))
    }
    /// Looks up a live lobby by code.
    pub async fn get(&self, code: &str) -> Result<Arc<Session>, GameError> {
        self.lobbies
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or(GameError::NotFound)
    }
    /// Closes a lobby and drops it from the registry.
    pub async fn remove(&self, code: &str) {
        if self.lobbies.write().await.remove(code).is_some() {
            log::info!("[arcade] lobby {} closed", code);
        }
    }
    /// Draws codes until one misses the live map. The alphabet gives
    /// 32^5 combinations, so exhausting the retry budget means the RNG is
    /// broken, not the registry full.
    fn code(lobbies: &HashMap<String, Arc<Session>>) -> Result<String, GameError> {
        use rand::seq::IndexedRandom;
        let ref mut rng = rand::rng();
        (0..CODE_RETRY_BUDGET)
            .map(|_| {
                (0..CODE_LENGTH)
                    .map(|_| *CODE_ALPHABET.choose(rng).expect("non empty alphabet") as char)
                    .collect::<String>()
            })
            .find(|code| !lobbies.contains_key(code))
            .ok_or(GameError::DuplicateId)
    }
}

impl Default for Arcade {
    fn default() -> Self {
        Self::new(Arc::new(Synthetic))
    }
}

impl Arcade {
    /// Spawns the WebSocket bridge for one connection.
    ///
    /// Outbound lobby messages drain to the socket; inbound text frames
    /// dispatch to lobby operations, with the ack unicast back on the same
    /// socket. When the socket dies the seat's transport ref is cleared,
    /// and the lobby is closed if nobody is left.
    pub async fn bridge(
        self: &Arc<Self>,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) -> anyhow::Result<()> {
        use futures::StreamExt;
        let connection: ID<Connection> = ID::default();
        let (tx, mut rx) = unbounded_channel::<ServerMessage>();
        session
            .text(ServerMessage::connected(connection).to_json())
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        log::debug!("[bridge {}] connected", connection);
        let arcade = self.clone();
        actix_web::rt::spawn(async move {
            let mut joined: Option<String> = None;
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = rx.recv() => match msg {
                        Some(msg) => if session.text(msg.to_json()).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    frame = stream.next() => match frame {
                        Some(Ok(actix_ws::Message::Text(text))) => {
                            let ack = arcade.dispatch(connection, &tx, &mut joined, &text).await;
                            if session.text(ack.to_json()).await.is_err() { break 'sesh }
                        }
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            if let Some(code) = joined {
                if let Ok(lobby) = arcade.get(&code).await {
                    if lobby.disconnect(connection).await {
                        arcade.remove(&code).await;
                    }
                }
            }
            log::debug!("[bridge {}] disconnected", connection);
        });
        Ok(())
    }
    /// Routes one inbound frame and shapes the caller-only ack.
    async fn dispatch(
        &self,
        connection: ID<Connection>,
        sender: &UnboundedSender<ServerMessage>,
        joined: &mut Option<String>,
        text: &str,
    ) -> ServerMessage {
        let request = match Protocol::decode(text) {
            Ok(request) => request,
            Err(e) => return ServerMessage::err(format!("malformed request: {}", e)),
        };
        match self.handle(connection, sender, joined, request).await {
            Ok(view) => ServerMessage::ok(view),
            Err(e) => ServerMessage::err(e.to_string()),
        }
    }
    async fn handle(
        &self,
        connection: ID<Connection>,
        sender: &UnboundedSender<ServerMessage>,
        joined: &mut Option<String>,
        request: ClientMessage,
    ) -> Result<LobbyView, GameError> {
        match request {
            ClientMessage::CreateLobby { name, theme } => {
                let (code, view) = self
                    .create(&name, &theme, connection, sender.clone())
                    .await?;
                *joined = Some(code);
                Ok(view)
            }
            ClientMessage::JoinLobby { lobby_id, name } => {
                let view = self
                    .get(&lobby_id)
                    .await?
                    .join(&name, connection, sender.clone())
                    .await?;
                *joined = Some(lobby_id);
                Ok(view)
            }
            ClientMessage::AddBot { lobby_id } => self.get(&lobby_id).await?.add_bot().await,
            ClientMessage::StartGame { lobby_id } => self.get(&lobby_id).await?.start().await,
            ClientMessage::ChooseAttribute {
                lobby_id,
                player_id,
                attr,
            } => {
                let attribute = Protocol::attr(&attr)?;
                let player = Protocol::player(&player_id)?;
                self.get(&lobby_id).await?.choose(player, attribute).await
            }
        }
    }
}
