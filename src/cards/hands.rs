use super::hand::Hand;

/// Combinatorial iterator over all k-card subsets of a hand.
///
/// Generates all C(n, k) subsets of the n cards in the source [`Hand`].
/// The combination is tracked as a bitstring over card *positions*
/// (0..n), advanced with Gosper's hack, and only projected back onto
/// card bits when yielded.
///
/// # Construction
///
/// Created from `(k, hand)`. A 7-card hand with `k = 5` yields 21 hands.
///
/// # Performance
///
/// - Memory: O(n) card bits, not all combinations
/// - Time per `.next()`: O(k) projection plus O(1) permutation
pub struct HandIterator {
    next: u64,
    cards: Vec<u64>,
}

impl HandIterator {
    /// Total number of combinations, C(n, k).
    pub fn combinations(&self) -> usize {
        let n = self.cards.len();
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }
    /// Tests whether iteration is complete.
    fn exhausted(&self) -> bool {
        self.next == 0 || self.next >> self.cards.len() != 0
    }
    /// Gosper's hack for next bit permutation with same popcount.
    ///
    /// See: https://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
    /// Projects the position bitstring onto the source cards.
    fn look(&self) -> Hand {
        let mut bits = self.next;
        let mut hand = 0u64;
        while bits > 0 {
            hand |= self.cards[bits.trailing_zeros() as usize];
            bits &= bits - 1;
        }
        Hand::from(hand)
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let last = self.look();
            self.next = self.permute();
            Some(last)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.exhausted() {
            true => (0, Some(0)),
            false => (0, Some(self.combinations())),
        }
    }
}

/// subset size and source are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((k, hand): (usize, Hand)) -> Self {
        let cards = hand.map(u64::from).collect::<Vec<u64>>();
        let next = match k {
            0 => 0,
            k if k > cards.len() => 0,
            k => (1 << k) - 1,
        };
        Self { next, cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_0() {
        let hand = Hand::try_from("As Kd 7h").unwrap();
        assert_eq!(HandIterator::from((0, hand)).count(), 0);
    }
    #[test]
    fn choose_too_many() {
        let hand = Hand::try_from("As Kd 7h").unwrap();
        assert_eq!(HandIterator::from((4, hand)).count(), 0);
    }
    #[test]
    fn choose_5_from_5() {
        let hand = Hand::try_from("As Kd 7h 3c 2c").unwrap();
        let mut iter = HandIterator::from((5, hand));
        assert_eq!(iter.next(), Some(hand));
        assert_eq!(iter.next(), None);
    }
    #[test]
    fn choose_5_from_6() {
        let hand = Hand::try_from("As Kd 7h 3c 2c 9s").unwrap();
        assert_eq!(HandIterator::from((5, hand)).count(), 6);
    }
    #[test]
    fn choose_5_from_7() {
        let hand = Hand::try_from("As Kd 7h 3c 2c 9s Td").unwrap();
        let subsets = HandIterator::from((5, hand)).collect::<Vec<Hand>>();
        assert_eq!(subsets.len(), 21);
        assert!(subsets.iter().all(|h| h.size() == 5));
        assert!(subsets.iter().all(|h| h.disjoint(&hand.complement())));
        let unique = subsets.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), 21);
    }
    #[test]
    fn combinations_count() {
        let hand = Hand::try_from("As Kd 7h 3c 2c 9s Td").unwrap();
        assert_eq!(HandIterator::from((5, hand)).combinations(), 21);
        assert_eq!(HandIterator::from((2, hand)).combinations(), 21);
        assert_eq!(HandIterator::from((3, hand)).combinations(), 35);
    }
}
