use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;

/// A simulated seat, created fresh for each trial.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    id: usize,
    hole: Hole,
    strength: Option<Strength>,
}

impl Player {
    pub fn new(id: usize, hole: Hole) -> Self {
        Self {
            id,
            hole,
            strength: None,
        }
    }
    /// Seat index within the trial, for callers inspecting showdowns.
    pub fn id(&self) -> usize {
        self.id
    }
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }
    /// Evaluates the hole against a complete five-card board.
    pub fn show(&mut self, board: Hand) -> Strength {
        debug_assert!(board.size() == 5);
        let strength = Strength::from(Hand::add(Hand::from(self.hole), board));
        self.strength = Some(strength);
        strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_known_after_showdown() {
        let mut player = Player::new(3, Hole::try_from("As Ad").unwrap());
        assert_eq!(player.strength(), None);
        let board = Hand::try_from("Ac 7h 2d 9s Jc").unwrap();
        let strength = player.show(board);
        assert_eq!(player.strength(), Some(strength));
        assert_eq!(strength.category(), crate::cards::category::Category::ThreeOfAKind);
        assert_eq!(player.id(), 3);
    }
}
