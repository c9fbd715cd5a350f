use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

/// A lazy evaluator for a hand's strength.
///
/// Using a compact representation of the Hand, we search for the highest
/// Ranking using bitwise operations: rank nibbles for pairs/trips/quads,
/// suit masks for flushes, and shifted rank masks for straights. Works on
/// any non-empty hand; [`Strength`] feeds it 5-card subsets.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in Hand")
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => {
                let mut rank = self.kicker_pool(ranking) & ranking.mask();
                while n < rank.count_ones() as usize {
                    rank &= rank - 1;
                }
                Kickers::from(rank)
            }
        }
    }

    /// flush kickers only come from the flush suit
    fn kicker_pool(&self, ranking: Ranking) -> u16 {
        match ranking {
            Ranking::Flush(_) => self
                .find_suit_of_flush()
                .map(|suit| u16::from(self.0.of(&suit)))
                .unwrap_or_default(),
            _ => u16::from(self.0),
        }
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = u16::from(self.0.of(&suit));
            Ranking::Flush(Rank::from(bits))
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(self.0.of(&suit))
                .map(Ranking::StraightFlush)
        })
    }

    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else {
            self.find_rank_of_wheel(ranks)
        }
    }
    /// secondary scan with the Ace read as a one, below the Two
    fn find_rank_of_wheel(&self, ranks: u16) -> Option<Rank> {
        let ace = (ranks >> u8::from(Rank::Ace)) & 1;
        let lows = ((ranks << 1) | ace) & 0b11111;
        (lows == 0b11111).then_some(Rank::Five)
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mine = u64::from(self.0);
        Rank::all()
            .into_iter()
            .rev()
            .filter(|&rank| Some(rank) != skip)
            .find(|&rank| (mine & u64::from(rank)).count_ones() >= n as u32)
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let ranking = e.find_ranking();
        let kickers = e.find_kickers(ranking);
        Self::from((ranking, kickers))
    }
}
