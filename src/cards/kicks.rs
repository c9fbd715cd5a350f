use super::rank::Rank;

/// A hand's kicker ranks as a 13-bit rank mask.
///
/// Kickers are distinct ranks and two hands only compare kickers when
/// their [`Ranking`](super::ranking::Ranking) is equal, so both masks have
/// the same popcount. Under that condition integer order on the mask is
/// exactly lexicographic order on the descending rank sequence.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism
/// comes out most significant first
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_order() {
        let kicks = Kickers::from(vec![Rank::Three, Rank::King, Rank::Nine]);
        assert_eq!(
            Vec::<Rank>::from(kicks),
            vec![Rank::King, Rank::Nine, Rank::Three]
        );
    }

    #[test]
    fn mask_order_is_lexicographic() {
        let a = Kickers::from(vec![Rank::King, Rank::Three, Rank::Two]);
        let b = Kickers::from(vec![Rank::Queen, Rank::Jack, Rank::Ten]);
        let c = Kickers::from(vec![Rank::King, Rank::Four, Rank::Two]);
        assert!(a > b);
        assert!(c > a);
    }
}
