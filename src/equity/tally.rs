use std::cmp::Ordering;

/// Raw win/tie counts over some number of completed trials.
///
/// Tallies from independent batches merge by addition, so the order in
/// which workers finish never changes the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub ties: usize,
    pub trials: usize,
}

/// one trial's showdown, hero against the best opponent
impl From<Ordering> for Tally {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Self { wins: 1, ties: 0, trials: 1 },
            Ordering::Equal => Self { wins: 0, ties: 1, trials: 1 },
            Ordering::Less => Self { wins: 0, ties: 0, trials: 1 },
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            trials: self.trials + rhs.trials,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_outcomes() {
        let tally = [Ordering::Greater, Ordering::Equal, Ordering::Less, Ordering::Greater]
            .into_iter()
            .map(Tally::from)
            .sum::<Tally>();
        assert_eq!(tally, Tally { wins: 2, ties: 1, trials: 4 });
    }
}
