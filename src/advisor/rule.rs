use super::action::Class;
use crate::Utility;
use crate::cards::street::Street;

/// Which streets a [`Rule`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Preflop,
    Postflop,
    Any,
}

impl Phase {
    pub fn contains(&self, street: Street) -> bool {
        match self {
            Self::Preflop => street.is_preflop(),
            Self::Postflop => !street.is_preflop(),
            Self::Any => true,
        }
    }
}

/// One row of the override table.
///
/// Fires when the street matches, the total strength lies in
/// `(above, through]`, and the classifier's suggestion is among `suggested`
/// (an empty list accepts any suggestion). Rows are checked in order and the
/// first that fires replaces the suggestion with `then`.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Rule {
    pub name: String,
    pub phase: Phase,
    pub above: Utility,
    #[serde(default)]
    pub through: Option<Utility>,
    #[serde(default)]
    pub suggested: Vec<Class>,
    pub then: Class,
}

impl Rule {
    pub fn fires(&self, street: Street, strength: Utility, suggested: Class) -> bool {
        self.phase.contains(street)
            && strength > self.above
            && self.through.is_none_or(|through| strength <= through)
            && (self.suggested.is_empty() || self.suggested.contains(&suggested))
    }

    /// First rule in `rules` that fires, if any.
    pub fn first<'a>(
        rules: &'a [Self],
        street: Street,
        strength: Utility,
        suggested: Class,
    ) -> Option<&'a Self> {
        rules
            .iter()
            .find(|rule| rule.fires(street, strength, suggested))
    }

    /// The built-in table.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                name: "preflop premium".into(),
                phase: Phase::Preflop,
                above: crate::PREFLOP_PREMIUM,
                through: None,
                suggested: vec![],
                then: Class::Raise3,
            },
            Self {
                name: "preflop strong".into(),
                phase: Phase::Preflop,
                above: crate::PREFLOP_STRONG,
                through: Some(crate::PREFLOP_PREMIUM),
                suggested: vec![],
                then: Class::Raise2,
            },
            Self {
                name: "postflop strong raise".into(),
                phase: Phase::Postflop,
                above: crate::POSTFLOP_STRONG,
                through: None,
                suggested: vec![Class::Raise1, Class::Raise2, Class::Raise3],
                then: Class::Raise2,
            },
            Self {
                name: "postflop medium call".into(),
                phase: Phase::Postflop,
                above: crate::POSTFLOP_MEDIUM,
                through: Some(crate::POSTFLOP_STRONG),
                suggested: vec![Class::Call],
                then: Class::Call,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(street: Street, strength: Utility, suggested: Class) -> Option<String> {
        Rule::first(&Rule::defaults(), street, strength, suggested).map(|r| r.name.clone())
    }

    #[test]
    fn preflop_bands() {
        assert_eq!(fired(Street::Pref, 0.81, Class::Fold).as_deref(), Some("preflop premium"));
        assert_eq!(fired(Street::Pref, 0.8, Class::Fold).as_deref(), Some("preflop strong"));
        assert_eq!(fired(Street::Pref, 0.61, Class::Check).as_deref(), Some("preflop strong"));
        assert_eq!(fired(Street::Pref, 0.6, Class::Check), None);
    }

    #[test]
    fn postflop_needs_matching_suggestion() {
        assert_eq!(
            fired(Street::Flop, 0.9, Class::Raise1).as_deref(),
            Some("postflop strong raise")
        );
        assert_eq!(fired(Street::Flop, 0.9, Class::Call), None);
        assert_eq!(
            fired(Street::Rive, 0.6, Class::Call).as_deref(),
            Some("postflop medium call")
        );
        assert_eq!(fired(Street::Rive, 0.6, Class::Raise3), None);
        assert_eq!(fired(Street::Turn, 0.5, Class::Call), None);
    }

    #[test]
    fn preflop_rules_ignore_postflop() {
        assert_eq!(fired(Street::Flop, 0.85, Class::Fold), None);
    }

    #[test]
    fn deserializes_with_defaults() {
        let rule = serde_json::from_str::<Rule>(
            r#"{"name":"shove","phase":"any","above":1.5,"then":"raise3"}"#,
        )
        .unwrap();
        assert_eq!(rule.through, None);
        assert!(rule.suggested.is_empty());
        assert!(rule.fires(Street::Turn, 1.6, Class::Check));
    }
}
