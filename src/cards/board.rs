use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::error::EngineError;

/// The visible community cards.
///
/// Only counts that correspond to a street (0, 3, 4, 5) are representable,
/// so the street is always derivable from the board itself.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Board(Hand);

impl Board {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn street(&self) -> Street {
        match self.0.size() {
            0 => Street::Pref,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::Rive,
        }
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl From<Board> for Vec<Card> {
    fn from(board: Board) -> Self {
        Vec::<Card>::from(board.0)
    }
}

impl TryFrom<Hand> for Board {
    type Error = EngineError;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        Street::try_from(hand.size()).map(|_| Self(hand))
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = EngineError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Street::try_from(cards.len())?;
        Self::try_from(Hand::try_from(cards)?)
    }
}

impl TryFrom<&str> for Board {
    type Error = EngineError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s).map_err(EngineError::InvalidHand)?;
        Self::try_from(cards.as_slice())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
