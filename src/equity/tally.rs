use crate::cards::category::Category;
use crate::cards::score::Score;

/// Showdown counts for one slice of trials.
///
/// Partial tallies from parallel batches merge associatively,
/// so the reduction order never changes the totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    wins: u64,
    ties: u64,
    losses: u64,
    hero: [u64; Category::COUNT],
    villain: [u64; Category::COUNT],
}

impl Tally {
    /// record one showdown from hero's point of view
    pub fn witness(&mut self, hero: Score, villain: Score) {
        match hero.cmp(&villain) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Equal => self.ties += 1,
            std::cmp::Ordering::Less => self.losses += 1,
        }
        self.hero[hero.category().index()] += 1;
        self.villain[villain.category().index()] += 1;
    }

    pub fn absorb(&mut self, other: &Self) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
        for i in 0..Category::COUNT {
            self.hero[i] += other.hero[i];
            self.villain[i] += other.villain[i];
        }
    }
    pub fn merge(mut self, other: Self) -> Self {
        self.absorb(&other);
        self
    }

    pub fn wins(&self) -> u64 {
        self.wins
    }
    pub fn ties(&self) -> u64 {
        self.ties
    }
    pub fn losses(&self) -> u64 {
        self.losses
    }
    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    pub fn hero_modal(&self) -> Category {
        Self::modal(&self.hero)
    }
    pub fn villain_modal(&self) -> Category {
        Self::modal(&self.villain)
    }

    /// most frequent category, equal counts going to the stronger one
    fn modal(histogram: &[u64; Category::COUNT]) -> Category {
        Category::all()
            .into_iter()
            .filter(|c| histogram[c.index()] > 0)
            .max_by_key(|c| (histogram[c.index()], *c))
            .unwrap_or_default()
    }
}
