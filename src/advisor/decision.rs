use super::action::Action;
use super::action::Class;
use super::position::Position;
use crate::Chips;
use crate::Utility;
use crate::cards::card::Card;
use crate::cards::street::Street;
use crate::equity::equity::Equity;

/// The recommended action, with enough context echoed back to audit it.
///
/// `amount` is zero for fold and check, the raise size for raises, and
/// absent for a call (match whatever the current bet is). A decision with
/// `error` set is a fallback fold: it has no strength or equity but still
/// echoes whatever street, cards and position sanitizing recovered.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Decision {
    pub action: Action,
    pub amount: Option<Chips>,
    #[serde(default)]
    pub street: Option<Street>,
    #[serde(default)]
    pub hole: Vec<Card>,
    #[serde(default)]
    pub board: Vec<Card>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub strength: Option<Utility>,
    #[serde(default)]
    pub equity: Option<Equity>,
    #[serde(default)]
    pub rule: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Decision {
    /// Fold for nothing, explaining why.
    pub fn fold(error: impl ToString) -> Self {
        Self {
            action: Action::Fold,
            amount: Some(0.),
            street: None,
            hole: vec![],
            board: vec![],
            position: Position::Unknown,
            strength: None,
            equity: None,
            rule: None,
            error: Some(error.to_string()),
        }
    }
    pub fn class(class: Class, tiers: &[Chips; 3]) -> Self {
        Self {
            action: class.action(),
            amount: class.amount(tiers),
            error: None,
            ..Self::fold("")
        }
    }
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.amount {
            Some(amount) if self.action == Action::Raise => write!(f, "{} {}", self.action, amount)?,
            _ => write!(f, "{}", self.action)?,
        }
        if let Some(ref rule) = self.rule {
            write!(f, " [{}]", rule)?;
        }
        if let Some(ref error) = self.error {
            write!(f, " ({})", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_zero_fold() {
        let decision = Decision::fold("incomplete state: need 2 hole cards, got 0");
        assert_eq!(decision.action, Action::Fold);
        assert_eq!(decision.amount, Some(0.));
        assert!(decision.is_fallback());
    }

    #[test]
    fn call_has_no_amount() {
        let decision = Decision::class(Class::Call, &crate::RAISE_TIERS);
        assert_eq!(decision.amount, None);
        assert!(!decision.is_fallback());
    }

    #[test]
    fn serializes_call_amount_as_null() {
        let decision = Decision::class(Class::Call, &crate::RAISE_TIERS);
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["action"], "call");
        assert!(json["amount"].is_null());
    }
}
