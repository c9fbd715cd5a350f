use super::table::Table;
use crate::Probability;
use crate::error::EngineError;
use crate::features::features::Features;

/// Width of the classifier input vector.
pub const INPUTS: usize = 7;

/// The fixed-width vector a classifier sees.
///
/// `[street index, pot/bet, shortest stack/pot, base strength,
/// suited bonus, connected bonus, broadway bonus]`. The pot odds slot is 0
/// when nothing is bet, and the stack ratio divides by at least one big
/// blind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input([f32; INPUTS]);

impl Input {
    pub fn values(&self) -> &[f32; INPUTS] {
        &self.0
    }
}

impl TryFrom<&Table> for Input {
    type Error = EngineError;
    fn try_from(table: &Table) -> Result<Self, Self::Error> {
        let (hole, board) = table.known()?;
        let features = Features::from((hole, board));
        let odds = if table.bet() > 0. {
            table.pot() / table.bet()
        } else {
            0.
        };
        let depth = table.shortest() / table.pot().max(1.);
        let flag = |on: bool, x: f32| if on { x } else { 0. };
        Ok(Self([
            board.street().index() as f32,
            odds,
            depth,
            features.base(),
            flag(features.suited(), 0.2),
            flag(features.connected(), 0.2),
            flag(features.broadway(), 0.1),
        ]))
    }
}

/// Anything that maps the table input to a distribution over action
/// classes. Outputs wider than the six known classes are allowed.
pub trait Classifier {
    fn predict(&self, input: &Input) -> Vec<Probability>;
}

/// Returns the same distribution for every input.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixed(pub Vec<Probability>);

impl Classifier for Fixed {
    fn predict(&self, _: &Input) -> Vec<Probability> {
        self.0.clone()
    }
}
