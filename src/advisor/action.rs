use crate::Chips;

/// The betting action reported to the player.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Check => write!(f, "check"),
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "raise"),
        }
    }
}

/// One of the six classifier output classes.
///
/// The three raise classes index into the configured raise tiers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Class {
    Fold = 0,
    Check = 1,
    Call = 2,
    Raise1 = 3,
    Raise2 = 4,
    Raise3 = 5,
}

impl Class {
    pub const fn all() -> [Self; 6] {
        [
            Self::Fold,
            Self::Check,
            Self::Call,
            Self::Raise1,
            Self::Raise2,
            Self::Raise3,
        ]
    }
    /// Arg-max index into a class. Indices past the six known classes fold.
    pub fn from_index(i: usize) -> Self {
        Self::all().get(i).copied().unwrap_or(Self::Fold)
    }
    pub fn action(&self) -> Action {
        match self {
            Self::Fold => Action::Fold,
            Self::Check => Action::Check,
            Self::Call => Action::Call,
            Self::Raise1 | Self::Raise2 | Self::Raise3 => Action::Raise,
        }
    }
    /// Zero for fold and check, none for call (match the current bet),
    /// and the tier size for raises.
    pub fn amount(&self, tiers: &[Chips; 3]) -> Option<Chips> {
        match self {
            Self::Fold | Self::Check => Some(0.),
            Self::Call => None,
            Self::Raise1 => Some(tiers[0]),
            Self::Raise2 => Some(tiers[1]),
            Self::Raise3 => Some(tiers[2]),
        }
    }
    pub fn is_raise(&self) -> bool {
        self.action() == Action::Raise
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Raise1 => write!(f, "raise x1"),
            Self::Raise2 => write!(f, "raise x2"),
            Self::Raise3 => write!(f, "raise x3"),
            other => write!(f, "{}", other.action()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_index_folds() {
        assert_eq!(Class::from_index(5), Class::Raise3);
        assert_eq!(Class::from_index(6), Class::Fold);
        assert_eq!(Class::from_index(40), Class::Fold);
    }

    #[test]
    fn amounts_by_class() {
        let tiers = crate::RAISE_TIERS;
        assert_eq!(Class::Fold.amount(&tiers), Some(0.));
        assert_eq!(Class::Check.amount(&tiers), Some(0.));
        assert_eq!(Class::Call.amount(&tiers), None);
        assert_eq!(Class::Raise2.amount(&tiers), Some(2.));
        assert_eq!(Class::Raise3.amount(&tiers), Some(3.));
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Class::Raise1).unwrap(), "\"raise1\"");
        assert_eq!(serde_json::to_string(&Action::Check).unwrap(), "\"check\"");
    }
}
