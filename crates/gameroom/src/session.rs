use super::Chooser;
use super::LobbyView;
use super::ServerMessage;
use super::Table;
use mc_cards::Attribute;
use mc_core::CARDS_PER_PLAYER;
use mc_core::Connection;
use mc_core::ID;
use mc_core::MIN_PLAYERS;
use mc_core::Unique;
use mc_gameplay::GameError;
use mc_gameplay::Lobby;
use mc_gameplay::Phase;
use mc_gameplay::Player;
use mc_supply::Supply;
use mc_supply::catalog;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

/// Live lobby coordinator.
///
/// Imperative shell that owns the Lobby (functional core) behind one lock
/// and fans state out through the connection table. Every mutating
/// operation serializes on the lobby lock, so two near-simultaneous
/// `choose` calls resolve exactly one round: the second observes the
/// advanced turn index and fails with `NotYourTurn`.
///
/// Lock order is lobby then table; the table guard is never held across
/// an await or a lobby acquisition.
pub struct Session {
    lobby: Mutex<Lobby>,
    table: Mutex<Table>,
    supply: Arc<dyn Supply>,
    bot: Arc<dyn Chooser>,
}

impl Session {
    pub fn new(lobby: Lobby, supply: Arc<dyn Supply>, bot: Arc<dyn Chooser>) -> Self {
        Self {
            lobby: Mutex::new(lobby),
            table: Mutex::new(Table::default()),
            supply,
            bot,
        }
    }
    /// Current snapshot, for the read-only HTTP surface.
    pub async fn view(&self) -> LobbyView {
        LobbyView::from(&*self.lobby.lock().await)
    }
    /// Seats (or re-binds) a player and registers their outbound channel.
    pub async fn join(
        &self,
        name: &str,
        connection: ID<Connection>,
        sender: UnboundedSender<ServerMessage>,
    ) -> Result<LobbyView, GameError> {
        let mut lobby = self.lobby.lock().await;
        lobby.join(name, Some(connection))?;
        self.table.lock().await.connect(connection, sender);
        let view = LobbyView::from(&*lobby);
        self.broadcast(ServerMessage::lobby_update(view.clone())).await;
        Ok(view)
    }
    /// Seats a bot.
    pub async fn add_bot(&self) -> Result<LobbyView, GameError> {
        let mut lobby = self.lobby.lock().await;
        lobby.add_bot()?;
        let view = LobbyView::from(&*lobby);
        self.broadcast(ServerMessage::lobby_update(view.clone())).await;
        Ok(view)
    }
    /// Requests a deck and deals it. The lobby stays locked across the
    /// supply call so seating cannot change between the count and the
    /// deal; the call itself is bounded with a placeholder fallback, so
    /// the lobby can never stall in Waiting.
    pub async fn start(&self) -> Result<LobbyView, GameError> {
        let mut lobby = self.lobby.lock().await;
        if lobby.phase() != Phase::Waiting {
            return Err(GameError::InvalidState);
        }
        if lobby.players().len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        let count = CARDS_PER_PLAYER * lobby.players().len();
        let deck = catalog(self.supply.as_ref(), lobby.theme(), count).await;
        lobby.start(deck)?;
        let view = LobbyView::from(&*lobby);
        self.broadcast(ServerMessage::game_started(view.clone())).await;
        self.run_bots(&mut lobby).await;
        Ok(view)
    }
    /// Resolves a round on behalf of a human caller, then plays any bot
    /// turns that follow.
    pub async fn choose(
        &self,
        player: ID<Player>,
        attribute: Attribute,
    ) -> Result<LobbyView, GameError> {
        let mut lobby = self.lobby.lock().await;
        let outcome = match lobby.choose(player, attribute) {
            Ok(outcome) => outcome,
            Err(e @ GameError::EmptyHand) => {
                // the lobby force-finished itself; show everyone the wreck
                self.broadcast(ServerMessage::lobby_update(LobbyView::from(&*lobby)))
                    .await;
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        self.broadcast(ServerMessage::round_result(&outcome, LobbyView::from(&*lobby)))
            .await;
        self.run_bots(&mut lobby).await;
        Ok(LobbyView::from(&*lobby))
    }
    /// Drops the connection and clears its seat's transport ref. Returns
    /// true when the session is dead: nobody seated, or nobody connected
    /// outside a live game.
    pub async fn disconnect(&self, connection: ID<Connection>) -> bool {
        self.table.lock().await.disconnect(connection);
        let mut lobby = self.lobby.lock().await;
        if lobby.disconnect(connection).is_some() {
            self.broadcast(ServerMessage::lobby_update(LobbyView::from(&*lobby)))
                .await;
        }
        lobby.players().is_empty() || (lobby.phase() != Phase::Playing && lobby.deserted())
    }
    /// Plays consecutive bot turns under the lock the triggering operation
    /// already holds, so each bot round is exactly-once like any other.
    async fn run_bots(&self, lobby: &mut Lobby) {
        while lobby.phase() == Phase::Playing {
            let (player, attribute) = {
                let seat = &lobby.players()[lobby.current()];
                if !seat.is_bot() {
                    break;
                }
                match seat.front() {
                    Some(card) => (seat.id(), self.bot.choose(card)),
                    None => break,
                }
            };
            match lobby.choose(player, attribute) {
                Ok(outcome) => {
                    self.broadcast(ServerMessage::round_result(&outcome, LobbyView::from(&*lobby)))
                        .await
                }
                Err(e) => {
                    log::error!("[lobby {}] bot turn failed: {}", lobby.code(), e);
                    break;
                }
            }
        }
    }
    async fn broadcast(&self, message: ServerMessage) {
        self.table.lock().await.broadcast(message);
    }
}
