//! Hand storage and scoring.

use crate::card::Card;

/// Sums card values with at most one ace promoted from 1 to 11.
///
/// The promotion adds 10 on top of the 1 already counted, and only
/// happens when the naive sum leaves room (<= 11). Additional aces
/// always stay at 1.
fn promote_one_ace<I: Iterator<Item = u8>>(values: I) -> u8 {
    let mut sum: u8 = 0;
    let mut has_ace = false;

    for value in values {
        if value == 1 {
            has_ace = true;
        }
        sum = sum.saturating_add(value);
    }

    if has_ace && sum <= 11 { sum + 10 } else { sum }
}

/// An ordered collection of cards, in deal order.
///
/// Deal order matters: it drives display, and the first slot is where
/// the house hides its hole card. Scoring follows table rules: an
/// empty hand is worth zero, a hand whose first card is face down is
/// worth zero (the hidden hole card masks the whole total), and
/// otherwise one ace may count as 11 when that does not bust the hand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card, preserving deal order.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes every card. Safe to call on an empty hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Mutable access to the first card dealt, the hole-card slot.
    pub fn first_card_mut(&mut self) -> Option<&mut Card> {
        self.cards.first_mut()
    }

    /// Total with the hole-card mask applied.
    ///
    /// Zero for an empty hand, and zero while the first card is face
    /// down, so a table watching the house sees no total until the
    /// hole card is revealed. Otherwise the per-card values are summed
    /// with at most one ace promoted to 11. Face-down cards count
    /// zero, so a hidden ace never promotes.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
    /// hand.add_card(Card::new(Rank::King, Suit::Spades));
    /// assert_eq!(hand.total(), 21);
    /// ```
    #[must_use]
    pub fn total(&self) -> u8 {
        match self.cards.first() {
            None => 0,
            Some(first) if !first.is_face_up() => 0,
            Some(_) => promote_one_ace(self.cards.iter().map(|card| card.value())),
        }
    }

    /// Total counting every card at rank value, face down or not.
    ///
    /// The house draw rule reads this one so that hiding the hole card
    /// never changes when the house stops drawing.
    #[must_use]
    pub fn full_total(&self) -> u8 {
        promote_one_ace(self.cards.iter().map(|card| card.rank().value()))
    }
}
