//! Core card-related types: Card, Rank, Suit

/// Suits in tie-break order: Diamonds < Clubs < Hearts < Spades.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Numeric suit, 0 (diamonds) to 3 (spades).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Suit> {
        Suit::ALL.get(index as usize).copied()
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Ranks in game order. The "2" is the highest rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Game value: 1 for "3" up to 13 for "2".
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        value
            .checked_sub(1)
            .and_then(|i| Rank::ALL.get(i as usize).copied())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// The card that must open every round.
pub const THREE_OF_DIAMONDS: Card = Card {
    rank: Rank::Three,
    suit: Suit::Diamonds,
};

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build from the numeric `(value, suit)` form used on the wire.
    pub fn from_value_suit(value: u8, suit: u8) -> Option<Card> {
        Some(Card {
            rank: Rank::from_value(value)?,
            suit: Suit::from_index(suit)?,
        })
    }

    /// Single-card strength: `value * 4 + suit`.
    pub const fn strength(self) -> u16 {
        self.rank.value() as u16 * 4 + self.suit.index() as u16
    }

    /// Display label such as `10♦` or `2♠`.
    pub fn label(self) -> String {
        format!("{}{}", self.rank.name(), self.suit.symbol())
    }
}

// Ord on Card is the game order: rank first, then suit as the tie-break.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
