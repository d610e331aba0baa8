//! Round engine and table state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::participant::{House, Player};

mod round;

/// A blackjack table: one deck, the house, and up to seven seated
/// players, fixed for the life of the engine.
///
/// [`Game::play`] runs one full round; the driver decides how many
/// rounds to play. Fields are public so a driver or test can inspect
/// the table between rounds.
pub struct Game {
    /// The deck, repopulated and reshuffled at the start of each round.
    pub deck: Deck,
    /// The dealer.
    pub house: House,
    /// Seated players, in seating order.
    pub players: Vec<Player>,
    /// Shuffle generator, seeded once at construction.
    rng: ChaCha8Rng,
}

impl Game {
    /// Seats the given players and seeds the shuffle generator.
    ///
    /// The seed is taken once here (a driver typically derives it from
    /// the clock at startup) and the same generator is reused for every
    /// shuffle afterwards. Seat-count limits are the driver's concern;
    /// the engine plays whatever table it is given.
    #[must_use]
    pub fn new(players: Vec<Player>, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            house: House::new(),
            players,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}
