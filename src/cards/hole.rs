use super::card::Card;
use super::hand::Hand;
use crate::error::EngineError;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two cards are present.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// Both cards, lower first.
    pub fn cards(&self) -> [Card; 2] {
        let mut cards = self.0;
        let lo = cards.next();
        let hi = cards.next();
        match (lo, hi) {
            (Some(lo), Some(hi)) => [lo, hi],
            _ => unreachable!("hole holds two cards"),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        debug_assert!(a != b);
        Self(Hand::from(a | b))
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = EngineError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards.len() {
            2 => Ok(Self(Hand::try_from(cards)?)),
            n => Err(EngineError::IncompleteState(format!(
                "need 2 hole cards, got {}",
                n
            ))),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = EngineError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s).map_err(EngineError::InvalidHand)?;
        Self::try_from(cards.as_slice())
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        super::deck::Deck::new().hole(rng)
    }
}
