use super::draws::Draws;
use crate::Utility;
use crate::cards::board::Board;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;

/// Cheap hand descriptors computed without any simulation.
///
/// Everything here is derived from the two hole cards, except the draw
/// flags which also look at the visible board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    high: Rank,
    low: Rank,
    suited: bool,
    straight_draw: bool,
    flush_draw: bool,
}

impl From<(Hole, Board)> for Features {
    fn from((hole, board): (Hole, Board)) -> Self {
        let [a, b] = hole.cards();
        let all = Hand::add(Hand::from(hole), Hand::from(board));
        let draws = Draws::from(all);
        Self {
            high: a.rank().max(b.rank()),
            low: a.rank().min(b.rank()),
            suited: a.suit() == b.suit(),
            straight_draw: draws.straight(),
            flush_draw: draws.flush(),
        }
    }
}

impl Features {
    pub fn pair(&self) -> bool {
        self.high == self.low
    }
    pub fn suited(&self) -> bool {
        self.suited
    }
    pub fn connected(&self) -> bool {
        self.gap() == 1
    }
    pub fn gap(&self) -> u8 {
        self.high.value() - self.low.value()
    }
    pub fn high(&self) -> Rank {
        self.high
    }
    pub fn low(&self) -> Rank {
        self.low
    }
    pub fn straight_draw(&self) -> bool {
        self.straight_draw
    }
    pub fn flush_draw(&self) -> bool {
        self.flush_draw
    }
    pub fn broadway(&self) -> bool {
        self.high >= Rank::King
    }

    /// High card rank over 14.
    pub fn high_card(&self) -> Utility {
        self.high.value() as Utility / 14.
    }
    /// Linear penalty for the rank distance, zero from a gap of 4.
    pub fn gap_penalty(&self) -> Utility {
        ((4. - self.gap() as Utility) / 4.).max(0.)
    }

    /// Preflop hand quality from the two hole cards.
    ///
    /// Pairs score `0.5 + rank/14 · 0.5`. Unpaired hands blend the high
    /// card, the gap penalty, and a suited bonus. Big cards and connected
    /// hands then earn flat bonuses, so the result can exceed 1.
    pub fn base(&self) -> Utility {
        let mut base = if self.pair() {
            0.5 + self.high_card() * 0.5
        } else {
            self.high_card() * 0.6 + self.gap_penalty() * 0.2 + self.bonus(self.suited, 0.2)
        };
        base += self.bonus(self.broadway(), 0.1);
        base += self.bonus(self.suited && self.connected(), 0.15);
        base += self.bonus(self.connected() && self.low >= Rank::Ten, 0.1);
        base
    }

    /// Draw-based improvement signal, capped at 1.
    pub fn potential(&self) -> Utility {
        let potential = self.bonus(self.suited, 0.2)
            + self.bonus(self.straight_draw, 0.2)
            + self.bonus(self.flush_draw, 0.2);
        potential.min(1.)
    }

    /// [base, high card, gap penalty, pair, suited, connected, straight draw, flush draw]
    pub fn vector(&self) -> [Utility; 8] {
        [
            self.base(),
            self.high_card(),
            self.gap_penalty(),
            self.bonus(self.pair(), 1.),
            self.bonus(self.suited, 1.),
            self.bonus(self.connected(), 1.),
            self.bonus(self.straight_draw, 1.),
            self.bonus(self.flush_draw, 1.),
        ]
    }

    fn bonus(&self, flag: bool, amount: Utility) -> Utility {
        if flag { amount } else { 0. }
    }
}

impl std::fmt::Display for Features {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}{} base {:.2} potential {:.2}{}{}",
            self.high,
            self.low,
            self.base(),
            self.potential(),
            if self.straight_draw { " straight-draw" } else { "" },
            if self.flush_draw { " flush-draw" } else { "" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(hole: &str, board: &str) -> Features {
        Features::from((Hole::try_from(hole).unwrap(), Board::try_from(board).unwrap()))
    }

    fn close(a: Utility, b: Utility) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn pocket_aces() {
        let f = features("As Ah", "");
        assert!(f.pair());
        assert!(!f.suited());
        assert!(close(f.base(), 1.1));
        assert!(close(f.potential(), 0.));
    }

    #[test]
    fn suited_ace_king() {
        let f = features("As Ks", "");
        assert!(f.suited() && f.connected());
        assert!(close(f.gap_penalty(), 0.75));
        assert!(close(f.base(), 1.3));
        assert!(close(f.potential(), 0.2));
    }

    #[test]
    fn offsuit_trash() {
        let f = features("7c 2d", "");
        assert_eq!(f.gap(), 5);
        assert!(close(f.gap_penalty(), 0.));
        assert!(close(f.base(), 0.3));
    }

    #[test]
    fn small_pair() {
        let f = features("2c 2d", "");
        assert!(close(f.base(), 0.5 + 2. / 14. * 0.5));
    }

    #[test]
    fn board_draws() {
        let f = features("9h 8h", "7h 6c 2h");
        assert!(f.straight_draw());
        assert!(f.flush_draw());
        assert!(close(f.potential(), 0.6));
        assert_eq!(f.vector()[6], 1.);
        assert_eq!(f.vector()[7], 1.);
    }
}
