use super::tally::Tally;
use super::verdict::Verdict;
use crate::Probability;
use crate::cards::category::Category;

/// The outcome of an equity calculation, always from hero's seat.
///
/// `wins + ties + losses == trials`, hero equity counts a tie as half a win,
/// and the two equities sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct EquityResult {
    pub hero: Probability,
    pub villain: Probability,
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
    pub trials: u64,
    pub hero_category: Category,
    pub villain_category: Category,
}

impl EquityResult {
    pub fn hero_percent(&self) -> Probability {
        self.hero * 100.
    }
    pub fn villain_percent(&self) -> Probability {
        self.villain * 100.
    }
    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.hero)
    }
    /// share of trials, as a percentage, for any of the three outcome counts
    pub fn share(&self, count: u64) -> Probability {
        count as Probability / self.trials as Probability * 100.
    }
}

impl From<Tally> for EquityResult {
    fn from(tally: Tally) -> Self {
        let trials = tally.trials();
        debug_assert!(trials > 0, "equity over zero trials");
        let hero = (tally.wins() as Probability + tally.ties() as Probability * 0.5)
            / trials as Probability;
        Self {
            hero,
            villain: 1. - hero,
            wins: tally.wins(),
            ties: tally.ties(),
            losses: tally.losses(),
            trials,
            hero_category: tally.hero_modal(),
            villain_category: tally.villain_modal(),
        }
    }
}

impl std::fmt::Display for EquityResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Hero: {:.1}% (W:{} T:{} L:{}) vs Villain: {:.1}%",
            self.hero_percent(),
            self.wins,
            self.ties,
            self.losses,
            self.villain_percent()
        )
    }
}
