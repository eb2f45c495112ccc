use super::GameError;
use super::Phase;
use super::Player;
use super::RoundOutcome;
use super::deal;
use mc_cards::Attribute;
use mc_cards::Card;
use mc_cards::Deck;
use mc_core::Connection;
use mc_core::ID;
use mc_core::MAX_PLAYERS;
use mc_core::MIN_PLAYERS;
use mc_core::Position;
use mc_core::StatValue;
use mc_core::TOTAL_ROUNDS;
use mc_core::Unique;
use mc_core::Wins;

/// One game session from Waiting through Finished.
///
/// Invariants held across every operation:
/// - `current < players.len()` whenever the phase is Playing
/// - `1 <= players.len() <= MAX_PLAYERS` from creation to destruction
/// - round resolution conserves the total card count across hands
///
/// The struct is purely synchronous; the owning session serializes access,
/// so two racing `choose` calls see consistent turn state and the loser is
/// rejected with `NotYourTurn` instead of double-resolving a round.
#[derive(Debug)]
pub struct Lobby {
    code: String,
    theme: String,
    phase: Phase,
    players: Vec<Player>,
    current: Position,
    round: usize,
    winner: Option<Position>,
}

impl Lobby {
    pub fn new(code: String, theme: String) -> Self {
        Self {
            code,
            theme,
            phase: Phase::Waiting,
            players: Vec::new(),
            current: 0,
            round: 1,
            winner: None,
        }
    }
    pub fn code(&self) -> &str {
        &self.code
    }
    pub fn theme(&self) -> &str {
        &self.theme
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn current(&self) -> Position {
        self.current
    }
    pub fn round(&self) -> usize {
        self.round
    }
    /// Match winner, set once the phase reaches Finished.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|seat| &self.players[seat])
    }
    /// Seat index of the given player id.
    pub fn seat_of(&self, player: ID<Player>) -> Option<Position> {
        self.players.iter().position(|p| p.id() == player)
    }
    /// True when no seat holds a live transport ref.
    pub fn deserted(&self) -> bool {
        self.players.iter().all(|p| p.connection().is_none())
    }
}

impl Lobby {
    /// Seat a new player, or re-bind the transport ref of a seated player
    /// returning with the same name. The rejoin path works in any phase
    /// because the client re-enters with its stored name after navigating
    /// between pages; new names are only admitted while Waiting.
    pub fn join(
        &mut self,
        name: &str,
        connection: Option<ID<Connection>>,
    ) -> Result<Position, GameError> {
        if let Some(seat) = self.players.iter().position(|p| p.name() == name) {
            let player = &mut self.players[seat];
            if player.is_bot() || player.connection().is_some() {
                return Err(GameError::NameTaken);
            }
            player.bind(connection);
            log::debug!("[lobby {}] {} rebound to seat {}", self.code, name, seat);
            return Ok(seat);
        }
        if self.phase != Phase::Waiting {
            return Err(GameError::InvalidState);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::LobbyFull);
        }
        self.players.push(Player::human(name, connection));
        log::info!("[lobby {}] {} joined", self.code, name);
        Ok(self.players.len() - 1)
    }
    /// Seat a bot player. Same capacity and phase checks as `join`.
    pub fn add_bot(&mut self) -> Result<Position, GameError> {
        if self.phase != Phase::Waiting {
            return Err(GameError::InvalidState);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::LobbyFull);
        }
        let name = (1..=MAX_PLAYERS + 1)
            .map(|n| format!("Bot {}", n))
            .find(|name| self.players.iter().all(|p| p.name() != name))
            .unwrap_or_else(|| format!("Bot {}", self.players.len() + 1));
        log::info!("[lobby {}] {} seated", self.code, name);
        self.players.push(Player::bot(name));
        Ok(self.players.len() - 1)
    }
    /// Deal the deck and move to Playing. Seat 0 (the host) leads round 1.
    /// The deck length must be an equal multiple of the seat count; the
    /// session requests exactly `CARDS_PER_PLAYER` per seat.
    pub fn start(&mut self, deck: Deck) -> Result<(), GameError> {
        if self.phase != Phase::Waiting {
            return Err(GameError::InvalidState);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        let seats = self.players.len();
        for (player, hand) in self.players.iter_mut().zip(deal(deck, seats)) {
            player.assign(hand);
        }
        self.phase = Phase::Playing;
        self.round = 1;
        self.current = 0;
        log::info!("[lobby {}] game started with {} seats", self.code, seats);
        Ok(())
    }
    /// Resolve one round: the player at the turn index names an attribute,
    /// every non-empty hand reveals its front card, the strictly greatest
    /// value wins (ties to the earliest seat), and the winner captures all
    /// reveals and leads the next round.
    pub fn choose(
        &mut self,
        player: ID<Player>,
        attribute: Attribute,
    ) -> Result<RoundOutcome, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::InvalidState);
        }
        let seat = self.seat_of(player).ok_or(GameError::NotFound)?;
        if seat != self.current {
            return Err(GameError::NotYourTurn);
        }
        if self.players[seat].hand().is_empty() {
            // unreachable: the turn holder is either the host at start or the
            // previous winner, both of whom hold cards
            log::error!(
                "[lobby {}] seat {} presented an empty hand in round {}, aborting",
                self.code,
                seat,
                self.round
            );
            self.abort();
            return Err(GameError::EmptyHand);
        }
        let reveals = self
            .players
            .iter()
            .map(|p| p.front().cloned())
            .collect::<Vec<Option<Card>>>();
        let winner = reveals
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.as_ref().map(|c| (s, c.stats.get(attribute))))
            .fold(None::<(Position, StatValue)>, |best, (s, v)| match best {
                Some((_, top)) if v <= top => best,
                _ => Some((s, v)),
            });
        let Some((winner, _)) = winner else {
            self.abort();
            return Err(GameError::EmptyHand);
        };
        // capture in seating order starting from the winner's own card
        let seats = self.players.len();
        let mut captured = Vec::new();
        for i in 0..seats {
            if let Some(card) = self.players[(winner + i) % seats].pop() {
                captured.push(card);
            }
        }
        self.players[winner].capture(captured);
        self.players[winner].reward();
        self.current = winner;
        self.round += 1;
        log::debug!(
            "[lobby {}] round {} on {} taken by seat {}",
            self.code,
            self.round - 1,
            attribute,
            winner
        );
        if self.round > TOTAL_ROUNDS {
            self.finish();
        }
        Ok(RoundOutcome {
            attribute,
            reveals,
            winner: self.players[winner].id(),
            seat: winner,
        })
    }
    /// Clear the transport ref of whichever seat holds this connection.
    /// While Waiting the seat is vacated entirely; once Playing the seat
    /// stays so the player can rejoin by name.
    pub fn disconnect(&mut self, connection: ID<Connection>) -> Option<Position> {
        let seat = self
            .players
            .iter()
            .position(|p| p.connection() == Some(connection))?;
        match self.phase {
            Phase::Waiting => {
                let player = self.players.remove(seat);
                log::info!("[lobby {}] {} left", self.code, player.name());
            }
            _ => self.players[seat].unbind(),
        }
        Some(seat)
    }
    /// Force-finish with no winner after an unrecoverable inconsistency.
    pub fn abort(&mut self) {
        self.phase = Phase::Finished;
        self.winner = None;
    }
    fn finish(&mut self) {
        self.phase = Phase::Finished;
        self.winner = self
            .players
            .iter()
            .enumerate()
            .fold(None::<(Position, Wins)>, |best, (s, p)| match best {
                Some((_, top)) if p.wins() <= top => best,
                _ => Some((s, p.wins())),
            })
            .map(|(seat, _)| seat);
        log::info!(
            "[lobby {}] match over, winner {:?}",
            self.code,
            self.winner().map(|p| p.name())
        );
    }
}
