use super::card::Card;
use super::category::Category;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::hands::HandIterator;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use crate::error::EngineError;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] (hand category plus its defining ranks) with
/// [`Kickers`] (tie-breaking cards). Ordering is lexicographic: ranking
/// first, then kickers. Equal strengths split the pot.
///
/// Built from 5 to 7 cards by keeping the best of every 5-card subset.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    pub fn category(&self) -> Category {
        self.ranking.category()
    }
    /// Full tie-break sequence, most significant first.
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks = self.ranking.ranks();
        ranks.extend(Vec::<Rank>::from(self.kicks));
        ranks
    }
}

/// Best 5-card strength within the hand.
///
/// Callers guarantee 5 to 7 cards; use `TryFrom` for unchecked input.
impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        debug_assert!((5..=7).contains(&hand.size()));
        match hand.size() {
            5 => Self::from(Evaluator::from(hand)),
            _ => HandIterator::from((5, hand))
                .map(Evaluator::from)
                .map(Self::from)
                .max()
                .unwrap_or_else(|| Self::from(Evaluator::from(hand))),
        }
    }
}

impl TryFrom<&[Card]> for Strength {
    type Error = EngineError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards.len() {
            5..=7 => Ok(Self::from(Hand::try_from(cards)?)),
            n => Err(EngineError::InvalidHand(format!(
                "need 5 to 7 cards, got {}",
                n
            ))),
        }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kicks): (Ranking, Kickers)) -> Self {
        Self { ranking, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.ranking, self.kicks)
    }
}

/// Scores 5 to 7 cards into their best 5-card [`Strength`].
///
/// Fewer than 5 cards, more than 7, or a repeated card is an
/// [`EngineError::InvalidHand`].
pub fn evaluate(cards: &[Card]) -> Result<Strength, EngineError> {
    Strength::try_from(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;

    fn strength(s: &str) -> Strength {
        evaluate(&Card::parse(s).unwrap()).unwrap()
    }

    #[test]
    fn rejects_short_and_long_hands() {
        let four = Card::parse("As Kd Qh Jc").unwrap();
        let eight = Card::parse("As Kd Qh Jc Ts 9s 8s 7s").unwrap();
        assert!(matches!(evaluate(&four), Err(EngineError::InvalidHand(_))));
        assert!(matches!(evaluate(&eight), Err(EngineError::InvalidHand(_))));
    }

    #[test]
    fn rejects_duplicates() {
        let cards = Card::parse("As Kd Qh Jc As").unwrap();
        assert!(matches!(evaluate(&cards), Err(EngineError::InvalidHand(_))));
    }

    #[test]
    fn best_subset_dominates_every_subset() {
        let ref mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(7);
        for n in 5..=7 {
            for _ in 0..500 {
                let mut deck = Deck::new();
                let hand = (0..n)
                    .map(|_| deck.draw(rng))
                    .map(Hand::from)
                    .fold(Hand::empty(), Hand::add);
                let best = Strength::from(hand);
                assert!(HandIterator::from((5, hand))
                    .map(Strength::from)
                    .all(|subset| subset <= best));
                assert!(HandIterator::from((5, hand))
                    .map(Strength::from)
                    .any(|subset| subset == best));
                assert_eq!(best, Strength::from(Evaluator::from(hand)));
            }
        }
    }

    #[test]
    fn categories_are_strictly_ordered() {
        let ladder = [
            strength("Ah Kd Qc Js 9h"),
            strength("2h 2d 3c 4s 5h"),
            strength("2h 2d 3c 3s 4h"),
            strength("2h 2d 2c 3s 4h"),
            strength("As 2h 3d 4c 5s"),
            strength("2h 3h 4h 5h 7h"),
            strength("2h 2d 2c 3s 3h"),
            strength("2h 2d 2c 2s 3h"),
            strength("As 2s 3s 4s 5s"),
        ];
        let worst = [
            strength("7h 5d 4c 3s 2h"),
            strength("2h 2d 3c 4s 5h"),
            strength("3h 3d 2c 2s 4h"),
            strength("2h 2d 2c 3s 4h"),
            strength("As 2h 3d 4c 5s"),
            strength("2h 3h 4h 5h 7h"),
            strength("2h 2d 2c 3s 3h"),
            strength("2h 2d 2c 2s 3h"),
            strength("As 2s 3s 4s 5s"),
        ];
        let best = [
            strength("Ah Kd Qc Js 9h"),
            strength("Ah Ad Kc Qs Jh"),
            strength("Ah Ad Kc Ks Qh"),
            strength("Ah Ad Ac Ks Qh"),
            strength("Ts Jh Qd Kc As"),
            strength("Ah Kh Qh Jh 9h"),
            strength("Ah Ad Ac Ks Kh"),
            strength("Ah Ad Ac As Kh"),
            strength("Ts Js Qs Ks As"),
        ];
        for (i, s) in ladder.iter().enumerate() {
            assert_eq!(s.category(), Category::all()[i]);
        }
        for i in 1..Category::all().len() {
            assert!(worst[i] > best[i - 1], "{} vs {}", worst[i], best[i - 1]);
        }
    }

    #[test]
    fn wheel_between_six_high_straight_and_high_card() {
        let wheel = strength("As 2h 3d 4c 5s");
        let six = strength("2h 3d 4c 5s 6h");
        let high = strength("Ah Kd Qc Js 9h");
        assert!(wheel < six);
        assert!(wheel > high);
        assert_eq!(wheel.category(), Category::Straight);
        assert_eq!(wheel.ranks(), vec![Rank::Five]);
    }

    #[test]
    fn identical_ranks_tie_across_suits() {
        assert_eq!(strength("Ah Ad Kc Ks Qh"), strength("As Ac Kd Kh Qs"));
        assert_eq!(strength("2h 3h 4h 5h 7h"), strength("2s 3s 4s 5s 7s"));
    }

    #[test]
    fn two_pair_tiebreak_order() {
        let aak = strength("Ah Ad 3c 3s Kh");
        let aaq = strength("Ah Ad 3c 3s Qh");
        let kkq = strength("Kh Kd Qc Qs Ah");
        let aa4 = strength("Ah Ad 4c 4s 2h");
        assert!(aak > aaq);
        assert!(aaq > kkq);
        assert!(aa4 > aak);
        assert_eq!(aak.ranks(), vec![Rank::Ace, Rank::Three, Rank::King]);
    }

    #[test]
    fn flush_tiebreak_uses_all_five() {
        let a = strength("Ah Kh 9h 5h 3h");
        let b = strength("Ad Kd 9d 5d 2d");
        assert!(a > b);
    }

    #[test]
    fn seven_cards_use_board() {
        let hero = strength("Ah Kh 2h 7d 9h Jh Th");
        let villain = strength("Qh 3h 2h 7d 9h Jh Th");
        assert!(hero > villain);
        assert_eq!(hero.category(), Category::Flush);
    }
}
