use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52`
/// - `u64`: Single-bit representation for set membership in [`Hand`]
/// - `String`: two-character notation like `"As"` or `"Tc"`, which is also
///   the serde representation
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
/// the last character is the suit, everything before it is the rank
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let (i, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| String::from("empty card str"))?;
        match i {
            0 => Err(format!("invalid card str: {}", s)),
            _ => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Ok(Card::from((rank, suit)))
            }
        }
    }
}
impl TryFrom<String> for Card {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(c: Card) -> Self {
        c.to_string()
    }
}

impl Card {
    /// Parses whitespace-separated card notations into a vector of cards.
    ///
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::random();
        let suit = card.suit();
        let rank = card.rank();
        assert!(card == Card::from((rank, suit)));
    }

    #[test]
    fn bijective_u8() {
        let card = Card::random();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_str() {
        let card = Card::random();
        assert!(Ok(card) == Card::try_from(card.to_string().as_str()));
    }

    #[test]
    fn parses_transcript_variants() {
        let ace = Card::from((Rank::Ace, Suit::S));
        assert_eq!(Card::try_from("As"), Ok(ace));
        assert_eq!(Card::try_from("AS"), Ok(ace));
        assert_eq!(Card::try_from("A♠"), Ok(ace));
        assert_eq!(Card::try_from("10h"), Ok(Card::from((Rank::Ten, Suit::H))));
    }

    #[test]
    fn rejects_placeholders() {
        assert!(Card::try_from("NA").is_err());
        assert!(Card::try_from("unknown").is_err());
        assert!(Card::try_from("(尚未發牌)").is_err());
        assert!(Card::try_from("").is_err());
        assert!(Card::try_from("s").is_err());
    }

    #[test]
    fn serde_as_notation() {
        let card = Card::from((Rank::King, Suit::D));
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Kd\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
    }
}
