/// The coarse class of a made hand, weakest to strongest.
///
/// Discriminants match the leading digit of a [`Score`](super::score::Score).
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Category {
    #[default]
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const COUNT: usize = 10;

    pub const fn all() -> [Self; Self::COUNT] {
        [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    }

    /// position in a dense histogram
    pub const fn index(&self) -> usize {
        *self as usize - 1
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl From<u8> for Category {
    fn from(n: u8) -> Self {
        match n {
            1 => Category::HighCard,
            2 => Category::OnePair,
            3 => Category::TwoPair,
            4 => Category::ThreeOfAKind,
            5 => Category::Straight,
            6 => Category::Flush,
            7 => Category::FullHouse,
            8 => Category::FourOfAKind,
            9 => Category::StraightFlush,
            10 => Category::RoyalFlush,
            _ => panic!("invalid category u8: {}", n),
        }
    }
}
impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c as u8
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
