use super::tally::Tally;
use crate::Probability;

/// Estimated showdown frequencies for the hero hand.
///
/// `win` and `tie` are fractions of the completed trials; the loss
/// frequency is whatever remains.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Equity {
    pub win: Probability,
    pub tie: Probability,
    pub trials: usize,
}

impl Equity {
    pub fn lose(&self) -> Probability {
        (1. - self.win - self.tie).max(0.)
    }
    /// Expected pot share, counting a tie as half a win.
    pub fn share(&self) -> Probability {
        self.win + self.tie / 2.
    }
}

impl From<Tally> for Equity {
    fn from(tally: Tally) -> Self {
        match tally.trials {
            0 => Self::default(),
            n => Self {
                win: tally.wins as Probability / n as Probability,
                tie: tally.ties as Probability / n as Probability,
                trials: n,
            },
        }
    }
}

impl std::fmt::Display for Equity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "win {:.3} tie {:.3} lose {:.3} ({} trials)",
            self.win,
            self.tie,
            self.lose(),
            self.trials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_from_tally() {
        let equity = Equity::from(Tally { wins: 6, ties: 2, trials: 10 });
        assert!((equity.win - 0.6).abs() < 1e-6);
        assert!((equity.tie - 0.2).abs() < 1e-6);
        assert!((equity.lose() - 0.2).abs() < 1e-6);
        assert!((equity.share() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn empty_tally_is_zero() {
        assert_eq!(Equity::from(Tally::default()), Equity::default());
    }
}
