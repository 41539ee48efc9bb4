use super::action::Action;
use super::cell::Cell;
use crate::Error;
use crate::Probability;
use std::collections::BTreeMap;

/// A starting-hand chart: one Action for each of the 169 grid cells.
///
/// Stored dense. Notation strings only appear when parsing or printing,
/// either as a comma list (`"AA,KK,AKs:call,72o:fold"`) or, through serde,
/// as a map from notation to action label.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Range([[Action; Cell::SIZE]; Cell::SIZE]);

impl Default for Range {
    fn default() -> Self {
        Self::empty()
    }
}

impl Range {
    /// folds everything
    pub fn empty() -> Self {
        Self([[Action::Fold; Cell::SIZE]; Cell::SIZE])
    }
    /// every cell takes the same action
    pub fn uniform(action: Action) -> Self {
        Self([[action; Cell::SIZE]; Cell::SIZE])
    }

    pub fn get(&self, cell: Cell) -> Action {
        self.0[cell.row()][cell.col()]
    }
    pub fn set(&mut self, cell: Cell, action: Action) {
        self.0[cell.row()][cell.col()] = action;
    }
    pub fn action(&self, notation: &str) -> Result<Action, Error> {
        Cell::try_from(notation).map(|cell| self.get(cell))
    }
    pub fn contains(&self, cell: Cell) -> bool {
        self.get(cell).is_played()
    }

    /// played cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|cell| self.contains(*cell))
    }
    /// number of starting-hand classes played
    pub fn hand_count(&self) -> usize {
        self.cells().count()
    }
    /// share of the 169 classes played, as a percentage
    pub fn play_percentage(&self) -> Probability {
        self.hand_count() as Probability / Cell::COUNT as Probability * 100.
    }
    /// physical holdings behind the played classes, ignoring blockers
    pub fn combo_count(&self) -> usize {
        self.cells().map(|cell| cell.n_combos()).sum()
    }
}

/// one comma separated entry: `AKs`, `AKs:call`, or `AK` for both suited and offsuit
fn entry(token: &str) -> Result<(Vec<Cell>, Action), Error> {
    let (hand, action) = match token.split_once(':') {
        Some((hand, label)) => (hand.trim(), Action::try_from(label)?),
        None => (token.trim(), Action::Raise),
    };
    let cells = match Cell::try_from(hand) {
        Ok(cell) => vec![cell],
        Err(e) => match hand.len() {
            2 => vec![
                Cell::try_from(format!("{}s", hand).as_str())?,
                Cell::try_from(format!("{}o", hand).as_str())?,
            ],
            _ => return Err(e),
        },
    };
    Ok((cells, action))
}

/// comma list; blank entries are skipped, later entries overwrite earlier ones
impl TryFrom<&str> for Range {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut range = Self::empty();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (cells, action) = entry(token)?;
            cells.into_iter().for_each(|cell| range.set(cell, action));
        }
        Ok(range)
    }
}

impl TryFrom<BTreeMap<String, String>> for Range {
    type Error = Error;
    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut range = Self::empty();
        for (notation, label) in map {
            range.set(Cell::try_from(notation.as_str())?, Action::try_from(label)?);
        }
        Ok(range)
    }
}
impl From<Range> for BTreeMap<String, String> {
    fn from(range: Range) -> Self {
        range
            .cells()
            .map(|cell| (cell.to_string(), String::from(range.get(cell))))
            .collect()
    }
}

/// the comma list form, raises left bare
impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let entries = self
            .cells()
            .map(|cell| match self.get(cell) {
                Action::Raise => cell.to_string(),
                action => format!("{}:{}", cell, action.label()),
            })
            .collect::<Vec<String>>();
        write!(f, "{}", entries.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_list() {
        let range = Range::try_from("AA, KK,AKs:call,72o:fold").unwrap();
        assert_eq!(range.action("AA").unwrap(), Action::Raise);
        assert_eq!(range.action("KK").unwrap(), Action::Raise);
        assert_eq!(range.action("AKs").unwrap(), Action::Call);
        assert_eq!(range.action("AKo").unwrap(), Action::Fold);
        assert_eq!(range.action("72o").unwrap(), Action::Fold);
        assert_eq!(range.hand_count(), 3);
        assert_eq!(range.combo_count(), 6 + 6 + 4);
    }

    #[test]
    fn unsuffixed_pair_of_ranks_means_both() {
        let range = Range::try_from("AK:3bet").unwrap();
        assert_eq!(range.action("AKs").unwrap(), Action::ThreeBet);
        assert_eq!(range.action("AKo").unwrap(), Action::ThreeBet);
        assert_eq!(range.combo_count(), 16);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Range::try_from("AA,XYZ").is_err());
        assert!(Range::try_from("AA:shove").is_err());
    }

    #[test]
    fn full_range() {
        let range = Range::uniform(Action::Call);
        assert_eq!(range.hand_count(), 169);
        assert_eq!(range.combo_count(), 1326);
        assert!((range.play_percentage() - 100.).abs() < 1e-9);
    }

    #[test]
    fn empty_range() {
        let range = Range::default();
        assert_eq!(range.hand_count(), 0);
        assert_eq!(range.play_percentage(), 0.);
        assert_eq!(range.to_string(), "");
    }

    #[test]
    fn display_parses_back() {
        let range = Range::try_from("QQ,AKs:call,T9s:3bet,A5o").unwrap();
        assert_eq!(Range::try_from(range.to_string().as_str()).unwrap(), range);
    }

    #[test]
    fn json_map() {
        let json = r#"{"AKs":"raise","QQ":"call","72o":"fold"}"#;
        let range = serde_json::from_str::<Range>(json).unwrap();
        assert_eq!(range.action("AKs").unwrap(), Action::Raise);
        assert_eq!(range.action("QQ").unwrap(), Action::Call);
        assert_eq!(range.hand_count(), 2);
        let back = serde_json::to_string(&range).unwrap();
        assert_eq!(serde_json::from_str::<Range>(&back).unwrap(), range);
        assert!(!back.contains("72o"));
    }
}
