use super::card::Card;
use super::category::Category;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use crate::Error;

/// A hand's strength.
///
/// This will always be constructed from a Hand, which is an unordered
/// set of Cards. The strength is determined by the Hand's value, and the
/// kicker cards are used to break ties.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn category(&self) -> Category {
        self.value.category()
    }
    /// every rank that can break a tie within the category, most significant first
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks = self.value.ranks();
        ranks.extend(Vec::<Rank>::from(self.kicks));
        ranks
    }
}

/// trusted path: callers guarantee 5 to 7 distinct cards
impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        debug_assert!((5..=7).contains(&hand.size()), "evaluating {} cards", hand.size());
        let eval = Evaluator::from(hand);
        let value = eval.find_ranking();
        let kicks = eval.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl TryFrom<&[Card]> for Strength {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        if !(5..=7).contains(&cards.len()) {
            return Err(Error::InvalidHandSize(cards.len()));
        }
        let hand = Hand::from(cards);
        match hand.size() == cards.len() {
            true => Ok(Self::from(hand)),
            false => Err(Error::InvalidInput(format!("duplicate card in {}", hand))),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}
