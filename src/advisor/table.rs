use super::position::Position;
use crate::Chips;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::error::EngineError;
use std::collections::BTreeMap;

/// A table snapshot as transcribed upstream.
///
/// Card tokens are kept as raw strings because transcription emits
/// placeholders ("NA", "unknown", "(尚未發牌)") for cards not yet dealt.
/// Every field defaults, so partial records deserialize.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TableState {
    #[serde(alias = "community_cards")]
    pub community: Vec<String>,
    #[serde(alias = "hand_cards")]
    pub hole: Vec<String>,
    #[serde(alias = "player_stacks")]
    pub stacks: BTreeMap<String, Chips>,
    #[serde(alias = "current_bet")]
    pub bet: Chips,
    #[serde(alias = "pot_size")]
    pub pot: Chips,
    pub position: String,
}

/// A sanitized [`TableState`].
///
/// Sanitizing never fails: unparseable card tokens are dropped and money
/// that is negative or not finite becomes zero. Whether what remains is a
/// playable hand is answered by the fallible accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    community: Vec<Card>,
    hole: Vec<Card>,
    stacks: BTreeMap<String, Chips>,
    bet: Chips,
    pot: Chips,
    position: Position,
}

impl From<&TableState> for Table {
    fn from(state: &TableState) -> Self {
        Self {
            community: Self::cards(&state.community),
            hole: Self::cards(&state.hole),
            stacks: state
                .stacks
                .iter()
                .map(|(seat, stack)| (seat.clone(), Self::chips(*stack)))
                .collect(),
            bet: Self::chips(state.bet),
            pot: Self::chips(state.pot),
            position: Position::from(state.position.as_str()),
        }
    }
}

impl Table {
    fn cards(tokens: &[String]) -> Vec<Card> {
        tokens
            .iter()
            .filter_map(|token| match Card::try_from(token.as_str()) {
                Ok(card) => Some(card),
                Err(e) => {
                    log::debug!("{:<32}{:<32}", "dropping card token", e);
                    None
                }
            })
            .collect()
    }
    fn chips(x: Chips) -> Chips {
        if x.is_finite() && x > 0. { x } else { 0. }
    }

    /// Exactly two distinct hole cards.
    pub fn hole(&self) -> Result<Hole, EngineError> {
        Hole::try_from(self.hole.as_slice())
    }
    /// A board with a street-sized card count.
    pub fn board(&self) -> Result<Board, EngineError> {
        Board::try_from(self.community.as_slice())
    }
    pub fn street(&self) -> Result<Street, EngineError> {
        self.board().map(|board| board.street())
    }
    /// Hole and board together, checked for shared cards.
    pub fn known(&self) -> Result<(Hole, Board), EngineError> {
        let hole = self.hole()?;
        let board = self.board()?;
        if Hand::from(hole).disjoint(&Hand::from(board)) {
            Ok((hole, board))
        } else {
            Err(EngineError::InvalidHand(format!(
                "hole {} overlaps board {}",
                hole, board
            )))
        }
    }

    /// Everyone at the table except the hero, at least one.
    pub fn opponents(&self) -> usize {
        self.stacks.len().saturating_sub(1).max(crate::OPPONENTS)
    }
    /// Shortest stack at the table, zero when no stacks are known.
    pub fn shortest(&self) -> Chips {
        self.stacks
            .values()
            .copied()
            .reduce(Chips::min)
            .unwrap_or_default()
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn pocket(&self) -> &[Card] {
        &self.hole
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn position(&self) -> Position {
        self.position
    }
}
