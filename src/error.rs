//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck has no cards left to deal.
    #[error("Out of cards. Unable to deal.")]
    OutOfCards,
}

/// Errors that can occur when flipping the hole card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// The hand holds no cards, so there is nothing to flip.
    #[error("There is no card to flip.")]
    EmptyHand,
}
