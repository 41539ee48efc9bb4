use super::card::Card;
use super::hand::Hand;
use crate::Error;

/// Community cards. Anywhere from preflop (empty) to river (five).
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Board(Hand);

impl Board {
    pub const MAX: usize = 5;

    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// how many cards a runout still has to deal
    pub fn missing(&self) -> usize {
        Self::MAX - self.size()
    }
}

impl TryFrom<Hand> for Board {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            n if n <= Self::MAX => Ok(Self(hand)),
            n => Err(Error::InvalidInput(format!("board holds at most 5 cards, got {}", n))),
        }
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let hand = Hand::from(cards);
        match hand.size() == cards.len() {
            true => Self::try_from(hand),
            false => Err(Error::InvalidInput(format!(
                "duplicate card on board {}",
                hand
            ))),
        }
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_five() {
        assert_eq!(Board::try_from("").unwrap().missing(), 5);
        assert_eq!(Board::try_from("Jh Ts 2c").unwrap().missing(), 2);
        assert!(Board::try_from("Jh Ts 2c 3c 4c").unwrap().missing() == 0);
        assert!(Board::try_from("Jh Ts 2c 3c 4c 5c").is_err());
        assert!(Board::try_from("Jh Jh").is_err());
    }
}
