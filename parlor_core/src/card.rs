use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    /// Deck construction order
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    pub fn label(&self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',    // ♣
            Suit::Hearts => '\u{2665}',   // ♥
            Suit::Spades => '\u{2660}',   // ♠
            Suit::Diamonds => '\u{2666}', // ♦
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
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
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
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
    ];

    /// Point value: face value for pips, 11 for the ace, 10 for court cards
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
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
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A rank paired with the point value it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankDescriptor {
    pub rank: Rank,
    pub value: u8,
}

impl RankDescriptor {
    pub fn new(rank: Rank) -> Self {
        Self {
            rank,
            value: rank.value(),
        }
    }

    /// All thirteen descriptors, A through K
    pub fn table() -> [RankDescriptor; 13] {
        Rank::ALL.map(RankDescriptor::new)
    }
}

impl fmt::Display for RankDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.rank, self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: RankDescriptor,
}

impl Card {
    pub fn new(suit: Suit, rank: RankDescriptor) -> Self {
        Self { suit, rank }
    }

    pub fn value(&self) -> u8 {
        self.rank.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pip_ranks_are_worth_face_value() {
        let pips = [
            (Rank::Two, 2),
            (Rank::Three, 3),
            (Rank::Four, 4),
            (Rank::Five, 5),
            (Rank::Six, 6),
            (Rank::Seven, 7),
            (Rank::Eight, 8),
            (Rank::Nine, 9),
            (Rank::Ten, 10),
        ];
        for (rank, value) in pips {
            assert_eq!(rank.value(), value);
            assert_eq!(rank.short_name().parse::<u8>().ok(), Some(value));
        }
    }

    #[test]
    fn test_ace_and_court_values() {
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
    }

    #[test]
    fn test_rank_table_order() {
        let names: Vec<&str> = RankDescriptor::table()
            .iter()
            .map(|d| d.rank.short_name())
            .collect();
        assert_eq!(
            names,
            ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"]
        );
        assert!(RankDescriptor::table()
            .iter()
            .all(|d| d.value == d.rank.value()));
    }

    #[test]
    fn test_display() {
        let card = Card::new(Suit::Hearts, RankDescriptor::new(Rank::Ten));
        assert_eq!(card.to_string(), "10\u{2665}");
        assert_eq!(RankDescriptor::new(Rank::Ace).to_string(), "A=11");
        assert_eq!(Suit::Diamonds.label(), "diamonds");
    }
}
