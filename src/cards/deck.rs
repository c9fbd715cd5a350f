use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// Deck extends much of Hand functionality, with ability to remove cards
/// from itself. Random selection via ::draw(), bulk dealing via ::deal().
///
/// Known cards (hero hole, visible board) are excluded up front by building
/// the deck from their complement, so no simulated card can collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }

    /// The full deck less every card in `known`.
    pub fn without(known: Hand) -> Self {
        Self(known.complement())
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// remove a uniformly random card from the deck
    ///
    /// picks an index i among the remaining cards, clears the i lowest set
    /// bits, and takes the next one
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.size() > 0);
        let i = rng.random_range(0..self.size());
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.remove(card);
        card
    }

    /// remove n random cards from the deck
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Hand {
        debug_assert!(self.size() >= n);
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }

    /// remove two cards from the deck
    /// to deal as a Hole
    pub fn hole<R: Rng>(&mut self, rng: &mut R) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_deck_has_52() {
        assert_eq!(Deck::new().size(), 52);
    }

    #[test]
    fn draws_every_card_exactly_once() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        let mut seen = Hand::empty();
        while deck.size() > 0 {
            let card = deck.draw(rng);
            assert!(!seen.contains(&card));
            seen = Hand::add(seen, Hand::from(card));
        }
        assert_eq!(seen.size(), 52);
    }

    #[test]
    fn excluded_cards_never_drawn() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let known = Hand::try_from("As Ad 7c 8h 2s").unwrap();
        let mut drawn = Hand::empty();
        for _ in 0..10_000 {
            let card = Deck::without(known).draw(rng);
            assert!(!known.contains(&card));
            drawn = Hand::from(u64::from(drawn) | u64::from(card));
        }
        assert_eq!(drawn, known.complement());
    }

    #[test]
    fn deal_removes_from_deck() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut deck = Deck::new();
        let dealt = deck.deal(5, rng);
        assert_eq!(dealt.size(), 5);
        assert_eq!(deck.size(), 47);
        assert!(dealt.disjoint(&Hand::from(deck)));
    }

    #[test]
    fn hole_is_two_cards() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut deck = Deck::new();
        let hole = deck.hole(rng);
        assert_eq!(Hand::from(hole).size(), 2);
        assert_eq!(deck.size(), 50);
    }
}
