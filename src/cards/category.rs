use super::ranking::Ranking;

/// Hand category with the ranks stripped off, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl Category {
    pub const fn all() -> [Category; 9] {
        [
            Category::HighCard,
            Category::Pair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
        ]
    }
}

impl From<Ranking> for Category {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::Pair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOfAKind,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOfAKind,
            Ranking::StraightFlush(_) => Category::StraightFlush,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::HighCard => write!(f, "high card"),
            Category::Pair => write!(f, "pair"),
            Category::TwoPair => write!(f, "two pair"),
            Category::ThreeOfAKind => write!(f, "three of a kind"),
            Category::Straight => write!(f, "straight"),
            Category::Flush => write!(f, "flush"),
            Category::FullHouse => write!(f, "full house"),
            Category::FourOfAKind => write!(f, "four of a kind"),
            Category::StraightFlush => write!(f, "straight flush"),
        }
    }
}
