use super::card::Card;
use super::category::Category;
use super::hand::Hand;
use super::strength::Strength;
use crate::Error;

/// Radix of the tiebreak accumulator, one digit per rank.
const RADIX: u32 = 13;
/// Width of one category band. Five tiebreak digits is the most any category uses.
const BAND: u32 = RADIX.pow(5);

/// A hand's strength flattened into one integer. Larger is stronger.
///
/// `category * 13^5 + tiebreak`, where the tiebreak packs the significant
/// ranks in base 13, most significant first. The weakest hand of a category
/// always outranks the strongest hand of the category below.
/// A royal flush scores exactly `10 * 13^5`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Score(u32);

impl Score {
    pub fn category(&self) -> Category {
        Category::from((self.0 / BAND) as u8)
    }
    pub fn tiebreak(&self) -> u32 {
        self.0 % BAND
    }
}

impl From<Strength> for Score {
    fn from(strength: Strength) -> Self {
        let category = u8::from(strength.category()) as u32;
        let tiebreak = strength
            .ranks()
            .into_iter()
            .map(|r| u8::from(r) as u32)
            .fold(0u32, |acc, r| acc * RADIX + r);
        Self(category * BAND + tiebreak)
    }
}

impl From<Hand> for Score {
    fn from(hand: Hand) -> Self {
        Self::from(Strength::from(hand))
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.category(), self.0)
    }
}

/// Scores any 5 to 7 distinct cards.
pub fn evaluate(cards: &[Card]) -> Result<Score, Error> {
    Strength::try_from(cards).map(Score::from)
}
