use crate::Error;
use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// One of the 169 starting-hand classes, addressed by its grid position.
///
/// Rows and columns both run Ace (0) down to Two (12). The diagonal holds
/// pairs, cells right of it are suited and cells left of it are offsuit.
///
/// ```text
///      A    K    Q   ..   2
/// A  [AA] [AKs][AQs] .. [A2s]
/// K  [AKo][KK] [KQs] .. [K2s]
/// Q  [AQo][KQo][QQ]  .. [Q2s]
/// 2  [A2o][K2o][Q2o] .. [22]
/// ```
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    pub const SIZE: usize = 13;
    pub const COUNT: usize = Self::SIZE * Self::SIZE;

    /// every cell in row-major grid order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Self::from((row, col))))
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }
    pub fn col(&self) -> usize {
        self.col as usize
    }
    pub fn is_pair(&self) -> bool {
        self.row == self.col
    }
    pub fn is_suited(&self) -> bool {
        self.col > self.row
    }
    pub fn is_offsuit(&self) -> bool {
        self.row > self.col
    }

    /// the higher of the two ranks
    pub fn hi(&self) -> Rank {
        Self::rank(self.row.min(self.col))
    }
    /// the lower of the two ranks
    pub fn lo(&self) -> Rank {
        Self::rank(self.row.max(self.col))
    }

    /// physical two-card holdings in this class
    pub fn n_combos(&self) -> usize {
        match (self.is_pair(), self.is_suited()) {
            (true, _) => 6,
            (false, true) => 4,
            (false, false) => 12,
        }
    }

    /// every physical holding, blocked or not, in ascending suit order
    pub fn combos(&self) -> Vec<Hole> {
        let (hi, lo) = (self.hi(), self.lo());
        Suit::all()
            .into_iter()
            .flat_map(|a| Suit::all().into_iter().map(move |b| (a, b)))
            .filter(|(a, b)| match (self.is_pair(), self.is_suited()) {
                (true, _) => a < b,
                (false, true) => a == b,
                (false, false) => a != b,
            })
            .map(|(a, b)| (Card::from((hi, a)), Card::from((lo, b))))
            .map(|pair| Hole::try_from(pair).expect("distinct cards"))
            .collect()
    }

    fn rank(index: u8) -> Rank {
        Rank::from(Rank::MAX as u8 - index)
    }
    fn index(rank: Rank) -> u8 {
        Rank::MAX as u8 - u8::from(rank)
    }
}

/// grid coordinates
impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        assert!(row < Self::SIZE && col < Self::SIZE, "cell out of grid");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }
}

/// hand notation, higher rank first: AA, AKs, 72o.
/// rank order and case are forgiven on the way in.
impl TryFrom<&str> for Cell {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let invalid = || Error::InvalidInput(format!("invalid hand notation: {:?}", s));
        let chars = s.trim().chars().collect::<Vec<char>>();
        let (a, b, suffix) = match chars.as_slice() {
            [a, b] => (*a, *b, None),
            [a, b, x] => (*a, *b, Some(x.to_ascii_lowercase())),
            _ => return Err(invalid()),
        };
        let a = Self::index(Rank::try_from(a.to_string().as_str())?);
        let b = Self::index(Rank::try_from(b.to_string().as_str())?);
        let (hi, lo) = (a.min(b), a.max(b));
        match (hi == lo, suffix) {
            (true, None) => Ok(Self { row: hi, col: lo }),
            (false, Some('s')) => Ok(Self { row: hi, col: lo }),
            (false, Some('o')) => Ok(Self { row: lo, col: hi }),
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.is_pair(), self.is_suited()) {
            (true, _) => write!(f, "{}{}", self.hi(), self.lo()),
            (false, true) => write!(f, "{}{}s", self.hi(), self.lo()),
            (false, false) => write!(f, "{}{}o", self.hi(), self.lo()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    #[test]
    fn corners() {
        assert_eq!(Cell::from((0, 0)).to_string(), "AA");
        assert_eq!(Cell::from((0, 1)).to_string(), "AKs");
        assert_eq!(Cell::from((1, 0)).to_string(), "AKo");
        assert_eq!(Cell::from((12, 12)).to_string(), "22");
        assert_eq!(Cell::from((12, 7)).to_string(), "72o");
    }

    #[test]
    fn notation_round_trip() {
        assert_eq!(Cell::all().count(), Cell::COUNT);
        for cell in Cell::all() {
            assert_eq!(Cell::try_from(cell.to_string().as_str()).unwrap(), cell);
        }
    }

    #[test]
    fn forgiving_parse() {
        assert_eq!(Cell::try_from("kas").unwrap(), Cell::from((0, 1)));
        assert_eq!(Cell::try_from("27O").unwrap(), Cell::from((12, 7)));
    }

    #[test]
    fn rejects_bad_notation() {
        assert!(Cell::try_from("AK").is_err());
        assert!(Cell::try_from("AAs").is_err());
        assert!(Cell::try_from("AKx").is_err());
        assert!(Cell::try_from("A").is_err());
        assert!(Cell::try_from("ZZ").is_err());
    }

    #[test]
    fn combo_counts() {
        for cell in Cell::all() {
            let combos = cell.combos();
            assert_eq!(combos.len(), cell.n_combos());
            assert!(combos.iter().all(|hole| {
                let ranks = Hand::from(*hole).map(|c| c.rank()).collect::<Vec<_>>();
                ranks.contains(&cell.hi()) && ranks.contains(&cell.lo())
            }));
        }
        let total = Cell::all().map(|c| c.n_combos()).sum::<usize>();
        assert_eq!(total, 1326);
    }

    #[test]
    fn suitedness() {
        let suited = Cell::try_from("AKs").unwrap().combos();
        let offsuit = Cell::try_from("AKo").unwrap().combos();
        let same = |hole: &Hole| {
            let cards = Vec::<Card>::from(Hand::from(*hole));
            cards[0].suit() == cards[1].suit()
        };
        assert!(suited.iter().all(same));
        assert!(!offsuit.iter().any(same));
    }
}
