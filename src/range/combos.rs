use super::range::Range;
use crate::Error;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;

/// Concrete holdings of every played cell that avoid the blocked cards.
///
/// Order follows the grid, row-major, then suits ascending within a cell,
/// so the same range and blockers always expand identically.
pub fn combos(range: &Range, blocked: Hand) -> Result<Vec<Hole>, Error> {
    let holes = range
        .cells()
        .flat_map(|cell| cell.combos())
        .filter(|hole| !Hand::from(*hole).overlaps(&blocked))
        .collect::<Vec<Hole>>();
    match holes.is_empty() {
        true => Err(Error::EmptyRange),
        false => Ok(holes),
    }
}
