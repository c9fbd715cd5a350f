use crate::Chips;
use crate::Utility;
use crate::advisor::rule::Rule;
use crate::cards::street::Street;
use anyhow::Context;
use std::time::Duration;

/// Tunables for one [`Engine`](crate::advisor::Engine).
///
/// Defaults come from the crate-level constants. Any subset of fields can be
/// given as JSON; missing fields keep their defaults, and a given `rules`
/// list replaces the built-in table entirely.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Use simulated equity as the potential signal instead of draw features.
    pub simulate: bool,
    pub trials: usize,
    /// Overrides the opponent count derived from the listed stacks.
    pub opponents: Option<usize>,
    /// Fixes the simulation seed for reproducible decisions.
    pub seed: Option<u64>,
    /// Wall-clock budget for the simulation, in milliseconds.
    pub budget_ms: Option<u64>,
    pub strength_weight: Utility,
    pub potential_weight: Utility,
    pub preflop_multiplier: Utility,
    pub tiers: [Chips; 3],
    pub rules: Vec<Rule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulate: true,
            trials: crate::TRIALS,
            opponents: None,
            seed: None,
            budget_ms: None,
            strength_weight: crate::STRENGTH_WEIGHT,
            potential_weight: crate::POTENTIAL_WEIGHT,
            preflop_multiplier: crate::PREFLOP_MULTIPLIER,
            tiers: crate::RAISE_TIERS,
            rules: Rule::defaults(),
        }
    }
}

impl Config {
    /// Stage weighting of the blended strength.
    pub fn multiplier(&self, street: Street) -> Utility {
        match street {
            Street::Pref => self.preflop_multiplier,
            _ => 1.,
        }
    }
    /// `(w_s · base + w_p · potential) · multiplier`
    pub fn blend(&self, base: Utility, potential: Utility, street: Street) -> Utility {
        (self.strength_weight * base + self.potential_weight * potential) * self.multiplier(street)
    }
    pub fn budget(&self) -> Option<Duration> {
        self.budget_ms.map(Duration::from_millis)
    }

    fn validate(self) -> anyhow::Result<Self> {
        anyhow::ensure!(self.trials > 0, "trials must be positive");
        anyhow::ensure!(self.opponents != Some(0), "opponents must be positive");
        anyhow::ensure!(
            [self.strength_weight, self.potential_weight, self.preflop_multiplier]
                .iter()
                .all(|w| w.is_finite() && *w >= 0.),
            "weights must be finite and nonnegative"
        );
        anyhow::ensure!(
            self.tiers.iter().all(|t| t.is_finite() && *t > 0.),
            "raise tiers must be finite and positive"
        );
        Ok(self)
    }
}

/// JSON config
impl TryFrom<&str> for Config {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str::<Self>(json)
            .context("parsing engine config")?
            .validate()
            .context("validating engine config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::action::Class;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::try_from("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let config = Config::try_from(r#"{"simulate": false, "tiers": [0.5, 1, 4]}"#).unwrap();
        assert!(!config.simulate);
        assert_eq!(config.tiers, [0.5, 1., 4.]);
        assert_eq!(config.trials, crate::TRIALS);
        assert_eq!(config.rules, Rule::defaults());
    }

    #[test]
    fn custom_rule_table_replaces_defaults() {
        let config = Config::try_from(
            r#"{"rules": [{"name": "never fold flop", "phase": "postflop", "above": 0.0,
                           "suggested": ["fold"], "then": "check"}]}"#,
        )
        .unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].then, Class::Check);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::try_from(r#"{"trials": 0}"#).is_err());
        assert!(Config::try_from(r#"{"opponents": 0}"#).is_err());
        assert!(Config::try_from(r#"{"strength_weight": -1}"#).is_err());
        assert!(Config::try_from("not json").is_err());
    }

    #[test]
    fn preflop_blend() {
        let config = Config::default();
        let total = config.blend(1.3, 0.2, Street::Pref);
        assert!((total - 1.032).abs() < 1e-5);
        assert!((config.blend(1.3, 0.2, Street::Flop) - 0.86).abs() < 1e-5);
    }
}
