use crate::Probability;
use crate::VERDICT_AHEAD;
use crate::VERDICT_STRONG;
use crate::VERDICT_UNDERDOG;

/// A coarse reading of hero equity.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    Behind,
    Underdog,
    Ahead,
    Strong,
}

impl Verdict {
    /// one line of advice for a given equity
    pub fn describe(&self, equity: Probability) -> String {
        let pct = equity * 100.;
        match self {
            Verdict::Strong => format!("STRONG - a {:.0}% favourite", pct),
            Verdict::Ahead => format!("AHEAD - slight edge at {:.0}%", pct),
            Verdict::Underdog => format!("UNDERDOG - {:.0}% equity, needs good pot odds", pct),
            Verdict::Behind => format!("BEHIND - only {:.0}% equity", pct),
        }
    }
}

impl From<Probability> for Verdict {
    fn from(equity: Probability) -> Self {
        match equity {
            e if e >= VERDICT_STRONG => Verdict::Strong,
            e if e >= VERDICT_AHEAD => Verdict::Ahead,
            e if e >= VERDICT_UNDERDOG => Verdict::Underdog,
            _ => Verdict::Behind,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Strong => write!(f, "STRONG"),
            Verdict::Ahead => write!(f, "AHEAD"),
            Verdict::Underdog => write!(f, "UNDERDOG"),
            Verdict::Behind => write!(f, "BEHIND"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers() {
        assert_eq!(Verdict::from(0.81), Verdict::Strong);
        assert_eq!(Verdict::from(0.65), Verdict::Strong);
        assert_eq!(Verdict::from(0.50), Verdict::Ahead);
        assert_eq!(Verdict::from(0.4621), Verdict::Underdog);
        assert_eq!(Verdict::from(0.35), Verdict::Underdog);
        assert_eq!(Verdict::from(0.18), Verdict::Behind);
    }

    #[test]
    fn monotone() {
        let verdicts = (0..=100)
            .map(|i| Verdict::from(i as Probability / 100.))
            .collect::<Vec<Verdict>>();
        assert!(verdicts.windows(2).all(|w| w[0] <= w[1]));
    }
}
