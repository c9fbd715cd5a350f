/// Errors surfaced by the evaluator, the simulator, and table sanitization.
///
/// `InvalidHand` is always a caller bug. `IncompleteState` is recovered by the
/// decision boundary as a fold. `SimulationUnderrun` is rejected before any
/// trial runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidHand(String),
    IncompleteState(String),
    SimulationUnderrun(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHand(s) => write!(f, "invalid hand: {}", s),
            Self::IncompleteState(s) => write!(f, "incomplete state: {}", s),
            Self::SimulationUnderrun(s) => write!(f, "simulation underrun: {}", s),
        }
    }
}

impl std::error::Error for EngineError {}
