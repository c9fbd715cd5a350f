use crate::cards::hand::Hand;
use crate::cards::suit::Suit;

/// Draw detection over the combined hole and board cards.
///
/// These are coarse signals, not out counts: a made straight or flush also
/// registers as a draw, and the wheel run is not considered.
#[derive(Debug, Clone, Copy)]
pub struct Draws(Hand);

impl From<Hand> for Draws {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Draws {
    /// Four or more consecutive distinct ranks.
    pub fn straight(&self) -> bool {
        let mut bits = u16::from(self.0);
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits > 0
    }
    /// Four or more cards of one suit.
    pub fn flush(&self) -> bool {
        Suit::all()
            .into_iter()
            .any(|suit| self.0.of(&suit).size() >= 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(s: &str) -> Draws {
        Draws::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn open_ended() {
        assert!(draws("9h 8d 7c 6s 2h").straight());
        assert!(!draws("9h 8d 7c 5s 2h").straight());
    }

    #[test]
    fn paired_ranks_count_once() {
        assert!(!draws("9h 9d 8c 7s").straight());
        assert!(draws("9h 9d 8c 7s Tc").straight());
    }

    #[test]
    fn no_wheel_run() {
        assert!(!draws("Ah 2d 3c 4s").straight());
    }

    #[test]
    fn four_to_a_flush() {
        assert!(draws("Ah 7h 3h Kh 2c").flush());
        assert!(!draws("Ah 7h 3h Kd 2c").flush());
    }
}
