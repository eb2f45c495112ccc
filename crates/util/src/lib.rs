//! Core type aliases, traits, and constants for metaclash.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the metaclash workspace.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index in a lobby's seating order (0 = host).
pub type Position = usize;
/// A single attribute value on a card, 1..=99.
pub type StatValue = u8;
/// Round wins accumulated by one player over a match.
pub type Wins = u8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Marker for transport connections. The engine only ever holds `ID<Connection>`
/// as a non-owning lookup key; the transport object lives in the gateway.
pub struct Connection;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying UUID.
    /// Useful for converting between marker types.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> std::str::FromStr for ID<T> {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<uuid::Uuid>().map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Maximum seats in a lobby.
pub const MAX_PLAYERS: usize = 4;
/// Minimum seated players required to start a game.
pub const MIN_PLAYERS: usize = 2;
/// Cards dealt to each seat at game start.
pub const CARDS_PER_PLAYER: usize = 6;
/// A match is a fixed number of rounds; the most round wins takes it.
pub const TOTAL_ROUNDS: usize = 6;
/// Lowest value an attribute can take.
pub const STAT_MIN: StatValue = 1;
/// Highest value an attribute can take.
pub const STAT_MAX: StatValue = 99;

// ============================================================================
// LOBBY CODES
// Human-enterable join codes. Alphabet omits 0/O and 1/I lookalikes.
// ============================================================================
/// Characters drawn for lobby codes.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
/// Length of a lobby code.
pub const CODE_LENGTH: usize = 5;
/// Generation attempts before giving up on a collision-free code.
pub const CODE_RETRY_BUDGET: usize = 32;

// ============================================================================
// UPSTREAM SUPPLY
// ============================================================================
/// Bound on the card supply call during game start. On expiry the lobby
/// falls back to placeholder cards rather than stalling in Waiting.
pub const SUPPLY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(3);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
