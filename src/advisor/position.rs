use crate::Utility;

/// Hero's seat relative to the button.
///
/// Parsed leniently from the table snapshot; anything unrecognized,
/// including the "NA" placeholder, is `Unknown`.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Position {
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "CO")]
    Cutoff,
    #[serde(rename = "MP")]
    Middle,
    #[serde(rename = "UTG")]
    UnderTheGun,
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Position {
    /// Positional advantage, latest to act highest. Scoring does not read
    /// it; it is carried for callers that weigh seats themselves.
    pub fn weight(&self) -> Utility {
        match self {
            Self::Button => 1.0,
            Self::Cutoff => 0.9,
            Self::Middle => 0.8,
            Self::UnderTheGun => 0.7,
            Self::SmallBlind => 0.6,
            Self::BigBlind => 0.5,
            Self::Unknown => 0.5,
        }
    }
}

impl From<&str> for Position {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "BTN" | "BU" | "BUTTON" => Self::Button,
            "CO" => Self::Cutoff,
            "MP" => Self::Middle,
            "UTG" => Self::UnderTheGun,
            "SB" => Self::SmallBlind,
            "BB" => Self::BigBlind,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Button => write!(f, "BTN"),
            Self::Cutoff => write!(f, "CO"),
            Self::Middle => write!(f, "MP"),
            Self::UnderTheGun => write!(f, "UTG"),
            Self::SmallBlind => write!(f, "SB"),
            Self::BigBlind => write!(f, "BB"),
            Self::Unknown => write!(f, "??"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse() {
        assert_eq!(Position::from("btn"), Position::Button);
        assert_eq!(Position::from(" UTG "), Position::UnderTheGun);
        assert_eq!(Position::from("NA"), Position::Unknown);
        assert_eq!(Position::from("(尚未確定)"), Position::Unknown);
    }

    #[test]
    fn weights() {
        assert_eq!(Position::Button.weight(), 1.0);
        assert_eq!(Position::BigBlind.weight(), 0.5);
        assert_eq!(Position::Unknown.weight(), 0.5);
    }
}
