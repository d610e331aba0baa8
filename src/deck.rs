//! The deck: the card source for a round.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::io::DisplaySink;
use crate::participant::Participant;

/// The undealt cards.
///
/// The back of the vector is the top of the deck: each deal pops one
/// previously-undealt card and moves it into the target hand, never
/// duplicating it and never handing it out twice.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck. Call [`Deck::populate`] before dealing.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Discards whatever is left and rebuilds the full 52-card set,
    /// every suit crossed with every rank, all face up. Calling it
    /// again at any point resets to a fresh full deck.
    pub fn populate(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Shuffles the undealt cards.
    ///
    /// The generator is supplied by the caller and should be seeded
    /// once per process, not per shuffle; reseeding from the clock on
    /// every shuffle repeats orderings within one clock tick.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals one card from the top of the deck into the target hand.
    ///
    /// # Errors
    ///
    /// Returns an error when the deck is empty; the target hand is left
    /// untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Deck, Hand};
    ///
    /// let mut deck = Deck::new();
    /// deck.populate();
    /// let mut hand = Hand::new();
    /// deck.deal(&mut hand).unwrap();
    /// assert_eq!(hand.len(), 1);
    /// assert_eq!(deck.remaining(), 51);
    /// ```
    pub fn deal(&mut self, hand: &mut Hand) -> Result<(), DealError> {
        match self.cards.pop() {
            Some(card) => {
                hand.add_card(card);
                Ok(())
            }
            None => Err(DealError::OutOfCards),
        }
    }

    /// Runs one participant's draw loop.
    ///
    /// Keeps dealing while the participant is not busted and still asks
    /// for cards, re-displaying the hand after every card and
    /// announcing a bust the moment it happens. If the deck runs dry
    /// mid-loop the condition is displayed and the loop stops; the
    /// round proceeds with the cards already dealt.
    pub fn additional_cards(&mut self, who: &mut dyn Participant, sink: &mut dyn DisplaySink) {
        while !who.is_busted() && who.is_hitting() {
            if let Err(err) = self.deal(who.hand_mut()) {
                log::warn!("draw loop for {} stopped: {err}", who.name());
                sink.display(&err.to_string());
                break;
            }

            sink.display(&who.describe());

            if who.is_busted() {
                who.announce_bust(sink);
            }
        }
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the undealt cards, bottom of the deck first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the undealt cards, mainly to arrange a known order in
    /// tests. The last card given is the first dealt.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}
