use crate::Error;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const MAX: Self = Suit::Spade;
    pub const MIN: Self = Suit::Club;

    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// every fourth bit of a card-set bitstring, offset by suit
/// C
/// xxxxxxxxxxxx 0001000100010001000100010001000100010001000100010001
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x1111111111111 << u8::from(s)
    }
}

impl TryFrom<&str> for Suit {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::Club),
            "d" | "♦" => Ok(Suit::Diamond),
            "h" | "♥" => Ok(Suit::Heart),
            "s" | "♠" => Ok(Suit::Spade),
            _ => Err(Error::InvalidInput(format!("invalid suit: {:?}", s))),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_masks_partition_deck() {
        let union = Suit::all()
            .into_iter()
            .map(u64::from)
            .fold(0u64, |a, b| a | b);
        assert_eq!(union, (1u64 << 52) - 1);
        assert_eq!(u64::from(Suit::Heart).count_ones(), 13);
    }

    #[test]
    fn parse_suits() {
        assert_eq!(Suit::try_from("S").unwrap(), Suit::Spade);
        assert_eq!(Suit::try_from("♦").unwrap(), Suit::Diamond);
        assert!(Suit::try_from("x").is_err());
    }
}
