use crate::error::EngineError;

/// The four betting rounds in Texas Hold'em.
///
/// A street is never reported by the table snapshot; it is derived from how
/// many community cards are visible.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Street {
    #[default]
    #[serde(rename = "preflop")]
    Pref = 0isize,
    #[serde(rename = "flop")]
    Flop = 1isize,
    #[serde(rename = "turn")]
    Turn = 2isize,
    #[serde(rename = "river")]
    Rive = 3isize,
}

impl Street {
    /// All four streets in order.
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Zero-based position in the betting order.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Community cards visible on this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Community cards still to come before showdown.
    pub const fn n_pending(&self) -> usize {
        5 - self.n_observed()
    }
    pub const fn is_preflop(&self) -> bool {
        matches!(self, Self::Pref)
    }
}

/// community card count isomorphism
impl TryFrom<usize> for Street {
    type Error = EngineError;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            _ => Err(EngineError::IncompleteState(format!(
                "{} community cards is not a street",
                n
            ))),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl crate::Arbitrary for Street {
    fn random() -> Self {
        match rand::random_range(0..4) {
            0 => Self::Pref,
            1 => Self::Flop,
            2 => Self::Turn,
            _ => Self::Rive,
        }
    }
}
