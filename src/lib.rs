//! A console blackjack table for one to seven players against the
//! house.
//!
//! The crate models the whole table: cards with a facing, hands with
//! ace-aware scoring and a hole-card mask, a 52-card deck, and a
//! [`Game`] engine that drives a full round: shuffle, the opening
//! deal, the hidden hole card, each player's hit loop, the house draw
//! to 17, and settlement. Prompting and printing stay behind the
//! [`DecisionProvider`] and [`DisplaySink`] traits so the engine runs
//! the same against a console or a scripted test double.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::io::{StdinDecisions, StdoutSink};
//! use twentyone::{Game, Player};
//!
//! let players = vec![
//!     Player::new("Alex", Box::new(StdinDecisions)),
//!     Player::new("Sam", Box::new(StdinDecisions)),
//! ];
//! let mut game = Game::new(players, 42);
//! let result = game.play(&mut StdoutSink);
//! println!("house finished on {}", result.house_total);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, FlipError};
pub use game::Game;
pub use hand::Hand;
pub use io::{DecisionProvider, DisplaySink};
pub use participant::{House, Participant, Player};
pub use result::{Outcome, RoundResult, SeatResult};
