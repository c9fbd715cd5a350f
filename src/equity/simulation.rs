use super::equity::Equity;
use super::player::Player;
use super::tally::Tally;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;
use crate::error::EngineError;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::time::Instant;

/// Monte Carlo equity estimate for one hero hand against random opponents.
///
/// Trials are split into fixed-size batches. Each batch owns a [`SmallRng`]
/// seeded from the base seed and its own index, and every trial builds its
/// own [`Deck`] from the complement of the known cards. Batches run on the
/// rayon pool and their [`Tally`]s are summed, so a seeded run reproduces
/// exactly regardless of how many threads take part.
#[derive(Debug, Clone, Copy)]
pub struct Simulation {
    hero: Hole,
    board: Board,
    opponents: usize,
    trials: usize,
    seed: Option<u64>,
    deadline: Option<Instant>,
}

impl Simulation {
    pub fn new(hero: Hole, board: Board) -> Self {
        Self {
            hero,
            board,
            opponents: crate::OPPONENTS,
            trials: crate::TRIALS,
            seed: None,
            deadline: None,
        }
    }
    pub fn opponents(mut self, n: usize) -> Self {
        self.opponents = n;
        self
    }
    pub fn trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    /// Stop issuing new trials once this instant passes. Every batch still
    /// completes at least one trial.
    pub fn deadline(mut self, at: Instant) -> Self {
        self.deadline = Some(at);
        self
    }

    pub fn run(&self) -> Result<Equity, EngineError> {
        self.validate()?;
        let base = self.seed.unwrap_or_else(rand::random::<u64>);
        let batches = self.trials.div_ceil(crate::BATCH_SIZE);
        let tally = (0..batches)
            .into_par_iter()
            .map(|i| self.batch(base, i))
            .sum::<Tally>();
        let equity = Equity::from(tally);
        if tally.trials < self.trials {
            log::debug!(
                "{:<32}{:<32}",
                "deadline reached",
                format!("{}/{} trials", tally.trials, self.trials)
            );
        }
        log::debug!("{:<32}{:<32}", format!("equity {} {}", self.hero, self.board), equity);
        Ok(equity)
    }

    /// rejects anything that would make a trial impossible
    /// before the first card is dealt
    fn validate(&self) -> Result<(), EngineError> {
        let hero = Hand::from(self.hero);
        let board = Hand::from(self.board);
        if !hero.disjoint(&board) {
            return Err(EngineError::InvalidHand(format!(
                "hole {} overlaps board {}",
                self.hero, self.board
            )));
        }
        if self.opponents == 0 {
            return Err(EngineError::SimulationUnderrun("no opponents".into()));
        }
        if self.trials == 0 {
            return Err(EngineError::SimulationUnderrun("no trials".into()));
        }
        let needed = 2 * self.opponents + self.board.street().n_pending();
        let available = Deck::without(Hand::add(hero, board)).size();
        if needed > available {
            return Err(EngineError::SimulationUnderrun(format!(
                "{} opponents need {} cards, deck has {}",
                self.opponents, needed, available
            )));
        }
        Ok(())
    }

    /// deterministic per-batch rng
    fn rng(&self, base: u64, batch: usize) -> SmallRng {
        use std::hash::DefaultHasher;
        use std::hash::Hash;
        use std::hash::Hasher;
        let ref mut hasher = DefaultHasher::new();
        base.hash(hasher);
        batch.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    fn batch(&self, base: u64, i: usize) -> Tally {
        let ref mut rng = self.rng(base, i);
        let size = crate::BATCH_SIZE.min(self.trials - i * crate::BATCH_SIZE);
        let mut tally = Tally::default();
        for _ in 0..size {
            tally = tally + self.trial(rng);
            if self.expired() {
                break;
            }
        }
        tally
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|at| Instant::now() >= at)
    }

    /// one full deal: opponents' holes, then the rest of the board
    fn trial(&self, rng: &mut SmallRng) -> Tally {
        let hero = Hand::from(self.hero);
        let known = Hand::from(self.board);
        let mut deck = Deck::without(Hand::add(hero, known));
        let mut players = (0..self.opponents)
            .map(|id| Player::new(id, deck.hole(rng)))
            .collect::<Vec<Player>>();
        let pending = self.board.street().n_pending();
        let board = Hand::add(known, deck.deal(pending, rng));
        let mine = Strength::from(Hand::add(hero, board));
        let best = players
            .iter_mut()
            .map(|player| player.show(board))
            .max()
            .unwrap_or(mine);
        Tally::from(mine.cmp(&best))
    }
}

/// Estimates the hero's win and tie frequency against `n_opponents` random
/// hands, completing `known_board` to five cards in every trial.
///
/// Hero must hold exactly two cards and the board must be 0, 3, 4, or 5
/// cards, otherwise the result is [`EngineError::IncompleteState`]. Shared or
/// repeated cards are [`EngineError::InvalidHand`]. Zero opponents, zero
/// trials, or a table too large for the deck is
/// [`EngineError::SimulationUnderrun`].
pub fn estimate_equity(
    hero: &[Card],
    n_opponents: usize,
    known_board: &[Card],
    trials: usize,
) -> Result<Equity, EngineError> {
    let hole = Hole::try_from(hero)?;
    let board = Board::try_from(known_board)?;
    Simulation::new(hole, board)
        .opponents(n_opponents)
        .trials(trials)
        .run()
}
