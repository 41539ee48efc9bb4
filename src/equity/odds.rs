use crate::Error;
use crate::EV_MARGIN;
use crate::Probability;

/// The price of calling a single bet into a pot.
///
/// `pot` is what sat in the middle before the bet, `bet` is what hero must
/// put in to continue. Winning collects `pot + bet`, losing forfeits `bet`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PotOdds {
    pot: f64,
    bet: f64,
}

/// What the price says to do with a given equity.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Decision {
    Call,
    Fold,
    BreakEven,
}

impl PotOdds {
    pub fn new(pot: f64, bet: f64) -> Result<Self, Error> {
        match (pot, bet) {
            (p, b) if p > 0. && b > 0. && p.is_finite() && b.is_finite() => Ok(Self { pot, bet }),
            _ => Err(Error::InvalidInput(format!(
                "pot and bet must be positive, got {} and {}",
                pot, bet
            ))),
        }
    }

    /// what a winning call collects
    pub fn reward(&self) -> f64 {
        self.pot + self.bet
    }
    /// call over the final pot. also the break-even equity.
    pub fn price(&self) -> Probability {
        self.bet / (self.reward() + self.bet)
    }
    /// reward to risk, as in 3 : 1
    pub fn ratio(&self) -> f64 {
        self.reward() / self.bet
    }
    /// chips won or lost per call on average
    pub fn ev(&self, equity: Probability) -> f64 {
        equity * self.reward() - (1. - equity) * self.bet
    }
    pub fn decide(&self, equity: Probability) -> Decision {
        match self.ev(equity) {
            ev if ev > EV_MARGIN => Decision::Call,
            ev if ev < -EV_MARGIN => Decision::Fold,
            _ => Decision::BreakEven,
        }
    }

    /// one line of advice for a given equity
    pub fn describe(&self, equity: Probability) -> String {
        let edge = (equity - self.price()) * 100.;
        match self.decide(equity) {
            Decision::Call => format!("CALL is +EV, {:.1}% more equity than needed", edge),
            Decision::Fold => format!("FOLD, {:.1}% short of the equity to call", -edge),
            Decision::BreakEven => "BREAK EVEN, equity matches the price".to_string(),
        }
    }
}

impl std::fmt::Display for PotOdds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "call {:.2} to win {:.2} ({:.1} : 1, needs {:.1}%)",
            self.bet,
            self.reward(),
            self.ratio(),
            self.price() * 100.
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_pot_bet() {
        let odds = PotOdds::new(10., 5.).unwrap();
        assert!((odds.price() - 0.25).abs() < 1e-12);
        assert!((odds.ratio() - 3.).abs() < 1e-12);
        assert_eq!(odds.to_string(), "call 5.00 to win 15.00 (3.0 : 1, needs 25.0%)");
    }

    #[test]
    fn expected_value() {
        let odds = PotOdds::new(10., 5.).unwrap();
        assert!((odds.ev(0.40) - 3.).abs() < 1e-12);
        assert!(odds.ev(odds.price()).abs() < 1e-12);
        assert_eq!(odds.decide(0.40), Decision::Call);
        assert_eq!(odds.decide(0.10), Decision::Fold);
        assert_eq!(odds.decide(0.25), Decision::BreakEven);
    }

    #[test]
    fn advice() {
        let odds = PotOdds::new(10., 5.).unwrap();
        assert_eq!(odds.describe(0.40), "CALL is +EV, 15.0% more equity than needed");
        assert_eq!(odds.describe(0.15), "FOLD, 10.0% short of the equity to call");
    }

    #[test]
    fn rejects_empty_amounts() {
        assert!(PotOdds::new(0., 5.).is_err());
        assert!(PotOdds::new(10., -1.).is_err());
        assert!(PotOdds::new(f64::NAN, 5.).is_err());
    }
}
