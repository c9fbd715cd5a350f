use super::action::Class;
use super::classifier::Classifier;
use super::classifier::Input;
use super::decision::Decision;
use super::rule::Rule;
use super::table::Table;
use super::table::TableState;
use crate::Probability;
use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::config::Config;
use crate::equity::equity::Equity;
use crate::equity::simulation::Simulation;
use crate::features::features::Features;
use anyhow::Context;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

/// Turns a table snapshot and a classifier distribution into a [`Decision`].
///
/// Scoring blends feature strength with simulated equity (or the draw
/// signal), then walks the override table. `decide` and `advise` never fail:
/// any error or panic inside scoring becomes a zero fold that carries the
/// error text.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl From<Config> for Engine {
    fn from(config: Config) -> Self {
        Self { config }
    }
}

impl Engine {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn decide(&self, state: &TableState, output: &[Probability]) -> Decision {
        let table = Table::from(state);
        self.guard(&table, || self.score(&table, output))
    }

    /// Encode the table, ask the classifier, then decide.
    pub fn advise<C: Classifier>(&self, state: &TableState, classifier: &C) -> Decision {
        let table = Table::from(state);
        self.guard(&table, || {
            let input = Input::try_from(&table).context("encoding classifier input")?;
            let output = classifier.predict(&input);
            self.score(&table, &output)
        })
    }

    /// Runs `score`, folding on error or panic. Fallback folds still echo
    /// whatever the sanitized table knows.
    fn guard<F>(&self, table: &Table, score: F) -> Decision
    where
        F: FnOnce() -> anyhow::Result<Decision>,
    {
        let fold = |error: String| Decision {
            street: table.street().ok(),
            hole: table.pocket().to_vec(),
            board: table.community().to_vec(),
            position: table.position(),
            ..Decision::fold(error)
        };
        match std::panic::catch_unwind(AssertUnwindSafe(score)) {
            Ok(Ok(decision)) => decision,
            Ok(Err(e)) => {
                log::warn!("{:<32}{:#}", "folding on error", e);
                fold(format!("{:#}", e))
            }
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| String::from("unknown panic"));
                log::warn!("{:<32}{}", "folding on panic", message);
                fold(format!("panic: {}", message))
            }
        }
    }

    fn score(&self, table: &Table, output: &[Probability]) -> anyhow::Result<Decision> {
        let (hole, board) = table.known().context("sanitizing table")?;
        let street = board.street();
        let suggested = Self::suggest(output).context("reading classifier output")?;
        let features = Features::from((hole, board));
        let equity = if self.config.simulate {
            Some(self.simulate(table, hole, board).context("simulating equity")?)
        } else {
            None
        };
        let potential = equity
            .map(|equity| equity.share())
            .unwrap_or_else(|| features.potential());
        let strength = self.config.blend(features.base(), potential, street);
        let rule = Rule::first(&self.config.rules, street, strength, suggested);
        let class = rule.map(|rule| rule.then).unwrap_or(suggested);
        let decision = Decision {
            street: Some(street),
            hole: hole.cards().to_vec(),
            board: board.into(),
            position: table.position(),
            strength: Some(strength),
            equity,
            rule: rule.map(|rule| rule.name.clone()),
            ..Decision::class(class, &self.config.tiers)
        };
        log::info!(
            "{:<32}{:<32}",
            format!("{} {} {} {:.3}", street, hole, board, strength),
            decision
        );
        Ok(decision)
    }

    /// arg-max over the finite entries, first index wins ties
    fn suggest(output: &[Probability]) -> anyhow::Result<Class> {
        output
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .fold(None, |best: Option<(usize, Probability)>, (i, p)| match best {
                Some((_, q)) if q >= p => best,
                _ => Some((i, p)),
            })
            .map(|(i, _)| Class::from_index(i))
            .context("no finite class probability")
    }

    fn simulate(&self, table: &Table, hole: Hole, board: Board) -> anyhow::Result<Equity> {
        let opponents = self.config.opponents.unwrap_or_else(|| table.opponents());
        let mut simulation = Simulation::new(hole, board)
            .opponents(opponents)
            .trials(self.config.trials);
        if let Some(seed) = self.config.seed {
            simulation = simulation.seed(seed);
        }
        if let Some(budget) = self.config.budget() {
            simulation = simulation.deadline(Instant::now() + budget);
        }
        Ok(simulation.run()?)
    }
}

/// [`Engine::decide`] with the default configuration.
pub fn decide(state: &TableState, output: &[Probability]) -> Decision {
    Engine::default().decide(state, output)
}
