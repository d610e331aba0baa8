//! Table participants: seated players and the house.

use crate::error::FlipError;
use crate::hand::Hand;
use crate::io::{DecisionProvider, DisplaySink};

/// Common capability of everyone holding a hand at the table.
///
/// The two implementations differ only in how they decide to keep
/// drawing: [`Player`] defers to its decision provider, while
/// [`House`] follows the fixed stand-on-17 rule. Bust checks, the bust
/// announcement, and hand rendering are shared default behavior.
pub trait Participant {
    /// Display name.
    fn name(&self) -> &str;

    /// The participant's hand.
    fn hand(&self) -> &Hand;

    /// Mutable access to the hand, used by the deck when dealing.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Whether the participant takes another card. For a player this
    /// blocks on external input; for the house it is a pure function of
    /// the hand.
    fn is_hitting(&mut self) -> bool;

    /// Whether the hand total exceeds 21.
    fn is_busted(&self) -> bool {
        self.hand().total() > 21
    }

    /// Announces that the participant has gone over 21.
    fn announce_bust(&self, sink: &mut dyn DisplaySink) {
        sink.display(&format!("{} busts.", self.name()));
    }

    /// One-line rendering: name, cards in deal order, and the total
    /// when it is visible.
    fn describe(&self) -> String {
        let hand = self.hand();
        if hand.is_empty() {
            return format!("{}: <empty>", self.name());
        }

        let cards = hand
            .cards()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let total = hand.total();
        if total == 0 {
            // Hole card still hidden; showing a total would leak it.
            format!("{}: {cards}", self.name())
        } else {
            format!("{}: {cards} Total Card Value: [-- {total} --]", self.name())
        }
    }
}

/// A seated player whose hit decisions come from an injected provider.
pub struct Player {
    name: String,
    hand: Hand,
    decisions: Box<dyn DecisionProvider>,
}

impl Player {
    /// Seats a player with the given name and decision provider.
    #[must_use]
    pub fn new(name: impl Into<String>, decisions: Box<dyn DecisionProvider>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            decisions,
        }
    }

    /// Announces that the player beat the house.
    pub fn announce_win(&self, sink: &mut dyn DisplaySink) {
        sink.display(&format!("{} wins.", self.name));
    }

    /// Announces that the house beat the player.
    pub fn announce_lose(&self, sink: &mut dyn DisplaySink) {
        sink.display(&format!("{} loses.", self.name));
    }

    /// Announces a tie with the house.
    pub fn announce_push(&self, sink: &mut dyn DisplaySink) {
        sink.display(&format!("{} pushes.", self.name));
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn is_hitting(&mut self) -> bool {
        self.decisions.wants_hit(&self.name)
    }
}

/// The dealer. Draws to 16, stands on 17 and higher.
#[derive(Debug, Default)]
pub struct House {
    hand: Hand,
}

impl House {
    /// Creates the house with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Flips the hole card, the first card dealt. Concealing and
    /// revealing are the same operation run twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty; the hand is left
    /// unchanged.
    pub fn flip_hole_card(&mut self) -> Result<(), FlipError> {
        match self.hand.first_card_mut() {
            Some(card) => {
                card.flip();
                Ok(())
            }
            None => Err(FlipError::EmptyHand),
        }
    }
}

impl Participant for House {
    fn name(&self) -> &str {
        "House"
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// The fixed house rule: hit on 16 or less, stand on 17 or more.
    /// Reads the facing-independent total so the rule gives the same
    /// answer whether or not the hole card is still hidden.
    fn is_hitting(&mut self) -> bool {
        self.hand.full_total() <= 16
    }
}
