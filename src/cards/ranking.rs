use super::category::Category;
use super::rank::Rank;

/// A poker hand's value.
///
/// This is a simplified version of the hand's value, and does not include the hand's kicker cards.
/// The value is ordered by the hand's Strength, and the kicker cards are used to break ties.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, all of the flush suit
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// ranks still eligible to kick
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Flush(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..) | Ranking::StraightFlush(..) | Ranking::Straight(..) => 0,
        }
    }

    /// ranks that define the made hand, most significant first.
    /// a royal flush has nothing left to compare.
    pub fn ranks(&self) -> Vec<Rank> {
        match *self {
            Ranking::StraightFlush(Rank::Ace) => vec![],
            Ranking::TwoPair(a, b) | Ranking::FullHouse(a, b) => vec![a, b],
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => vec![r],
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::TwoPair(_, _) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOfAKind,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(_, _) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOfAKind,
            Ranking::StraightFlush(Rank::Ace) => Category::RoyalFlush,
            Ranking::StraightFlush(_) => Category::StraightFlush,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}
