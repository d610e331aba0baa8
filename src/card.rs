//! Card, rank, and suit types.

use core::fmt;

/// Card rank, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace. Counts 1 on the card; a whole hand may promote it to 11.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Blackjack value of the rank: face cards count 10, the ace counts
    /// 1 here and may be promoted to 11 when a whole hand is scored.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Rank;
    ///
    /// assert_eq!(Rank::Ace.value(), 1);
    /// assert_eq!(Rank::Seven.value(), 7);
    /// assert_eq!(Rank::Queen.value(), 10);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        let raw = self as u8;
        if raw > 10 { 10 } else { raw }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        };
        f.write_str(symbol)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// A playing card with a facing.
///
/// A face-down card scores zero and renders as `XX`; flipping it back
/// up restores its rank value and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a new card, face up.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Scoring value of the card: 0 while face down, otherwise the rank
    /// value.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Rank, Suit};
    ///
    /// let mut card = Card::new(Rank::King, Suit::Spades);
    /// assert_eq!(card.value(), 10);
    /// card.flip();
    /// assert_eq!(card.value(), 0);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        if self.face_up { self.rank.value() } else { 0 }
    }

    /// Turns a face-up card face down and vice versa.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{} {}", self.rank, self.suit)
        } else {
            f.write_str("XX")
        }
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;
