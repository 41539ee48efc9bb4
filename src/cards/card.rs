use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52`, the canonical card id
/// - `u64`: Single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards can be parsed from two-character strings like `"As"` (ace of spades)
/// or `"Tc"` (ten of clubs). Use [`Card::parse`] for multiple cards.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace and commas are ignored. Each card is two characters: rank then suit.
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.replace(|c: char| c.is_whitespace() || c == ',', "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52, "card id out of range: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.chars().count() {
            2 => {
                let mut chars = s.chars();
                let rank = chars.next().map(String::from).unwrap_or_default();
                let suit = chars.next().map(String::from).unwrap_or_default();
                let rank = Rank::try_from(rank.as_str())?;
                let suit = Suit::try_from(suit.as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(Error::InvalidInput(format!("card needs 2 characters: {:?}", s))),
        }
    }
}
impl TryFrom<String> for Card {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(c: Card) -> Self {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;

    #[test]
    fn bijective_rank_suit() {
        let card = Deck::seeded(0).draw_one().unwrap();
        let suit = card.suit();
        let rank = card.rank();
        assert!(card == Card::from((rank, suit)));
    }

    #[test]
    fn bijective_u8() {
        for id in 0..52u8 {
            assert_eq!(id, u8::from(Card::from(id)));
        }
    }

    #[test]
    fn canonical_id() {
        let card = Card::try_from("Ts").unwrap();
        assert_eq!(u8::from(card), 8 * 4 + 3);
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::Spade);
    }

    #[test]
    fn ordering_by_rank_then_suit() {
        let deuce = Card::try_from("2s").unwrap();
        let trey = Card::try_from("3c").unwrap();
        let trey_hearts = Card::try_from("3h").unwrap();
        assert!(deuce < trey);
        assert!(trey < trey_hearts);
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("As Kd, 2c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1], Card::try_from("Kd").unwrap());
        assert!(Card::parse("AsK").is_err());
        assert!(Card::parse("Ax").is_err());
    }

    #[test]
    fn serde_as_notation() {
        let card = Card::try_from("Qh").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Qh\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
    }
}
