//! Hold'em hand evaluation, equity simulation, and action advice.
//!
//! The crate turns an already-structured table snapshot into a recommended
//! action. Everything upstream (screen capture, vision transcription, text
//! parsing) and downstream (notification, persistence) lives elsewhere.
//!
//! - [`cards`]: cards, decks, and the 5-to-7 card hand evaluator
//! - [`equity`]: Monte Carlo win/tie estimation against random opponents
//! - [`features`]: cheap hole/board features and draw detection
//! - [`advisor`]: table sanitization, the override rule table, and the decision boundary
pub mod advisor;
pub mod cards;
pub mod config;
pub mod equity;
pub mod error;
pub mod features;

pub use advisor::Decision;
pub use advisor::Engine;
pub use advisor::TableState;
pub use advisor::decide;
pub use config::Config;
pub use equity::estimate_equity;
pub use error::EngineError;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot, bet, stack, and raise sizes, all in big blinds.
pub type Chips = f32;
/// Win/tie frequencies and classifier output weights.
pub type Probability = f32;
/// Heuristic hand-strength scalars. Not a probability; may exceed 1.
pub type Utility = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// EQUITY SIMULATION
// ============================================================================
/// Trials per decision. Trades estimate variance against latency.
pub const TRIALS: usize = 1000;
/// Trials run by one worker with one RNG before results are merged.
/// Fixed so that seeded runs reproduce regardless of thread count.
pub const BATCH_SIZE: usize = 64;
/// Opponents assumed when the table snapshot lists no other stacks.
pub const OPPONENTS: usize = 1;

// ============================================================================
// STRENGTH BLENDING
// total = (STRENGTH_WEIGHT · base + POTENTIAL_WEIGHT · potential) · multiplier
// ============================================================================
/// Weight of the feature-derived base strength.
pub const STRENGTH_WEIGHT: Utility = 0.6;
/// Weight of the equity (or draw) potential signal.
pub const POTENTIAL_WEIGHT: Utility = 0.4;
/// Preflop scaling of the blended strength. Postflop streets use 1.0.
pub const PREFLOP_MULTIPLIER: Utility = 1.2;

// ============================================================================
// OVERRIDE THRESHOLDS (see `advisor::rule`)
// ============================================================================
/// Preflop strength above which the top raise tier is forced.
pub const PREFLOP_PREMIUM: Utility = 0.8;
/// Preflop strength above which the middle raise tier is forced.
pub const PREFLOP_STRONG: Utility = 0.6;
/// Postflop strength above which a suggested raise becomes the middle tier.
pub const POSTFLOP_STRONG: Utility = 0.7;
/// Postflop strength above which a suggested call is confirmed.
pub const POSTFLOP_MEDIUM: Utility = 0.5;
/// Raise sizes for the classifier's three raise classes, in big blinds.
pub const RAISE_TIERS: [Chips; 3] = [1.0, 2.0, 3.0];
