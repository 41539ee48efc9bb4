use super::card::Card;
use super::hand::Hand;
use crate::Error;

/// A player's two private cards. Also the unit of a concrete range combo.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Hand> for Hole {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(Error::InvalidInput(format!("hole needs exactly 2 cards, got {}", n))),
        }
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(Error::InvalidInput(format!("duplicate card: {}", a))),
            false => Ok(Self(Hand::add(Hand::from(a), Hand::from(b)))),
        }
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] => Self::try_from((*a, *b)),
            _ => Err(Error::InvalidInput(format!(
                "hole needs exactly 2 cards, got {}",
                cards.len()
            ))),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}
