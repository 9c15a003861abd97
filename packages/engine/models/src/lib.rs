#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Rule, weight, and suspect scoring types for the probability engine.
//!
//! Defines the closed vocabulary of scoring rules, the bounded weight
//! table the engine reads from, the confidence buckets derived from a
//! probability score, and the [`Suspect`] result produced for each
//! candidate during an analysis run.

use std::collections::BTreeMap;

use dragnet_criminal_models::Criminal;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Lowest weight a rule may carry.
pub const MIN_WEIGHT: f64 = 5.0;

/// Highest weight a rule may carry.
pub const MAX_WEIGHT: f64 = 50.0;

/// Weight read for a rule with no entry in the table.
pub const DEFAULT_WEIGHT: f64 = 10.0;

/// Ceiling for a suspect's probability score.
pub const MAX_PROBABILITY: f64 = 100.0;

/// The scoring rules the engine knows about, in weight table order.
///
/// Declaration order doubles as the tie-break order wherever entries with
/// equal weights are ranked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    /// Scene crime type maps to the candidate's kind.
    CrimeTypeMatch,
    /// Candidate's modus operandi matches the scene organization.
    MoSimilarity,
    /// Candidate is known to operate where the crime happened.
    LocationProximity,
    /// Weapon evidence matches the candidate's declared preference.
    WeaponMatch,
    /// Digital evidence against a cyber offender.
    DigitalEvidence,
    /// Witness testimony is available at the scene.
    WitnessTestimony,
    /// Surveillance footage is available at the scene.
    SurveillanceFootage,
    /// Financial records against a financial offender.
    FinancialRecords,
    /// Candidate has previously committed this crime type.
    PriorCrimes,
    /// Scene victim matches the candidate's preferred victim type.
    VictimProfileMatch,
    /// Reserved: temporal pattern correlation. No current rule consults it.
    TimePattern,
    /// Reserved: scene organization scoring. No current rule consults it.
    SceneOrganization,
    /// Candidate carries a high reoffending risk.
    RiskFactor,
    /// Candidate is classified as extremely dangerous.
    DangerLevel,
}

impl RuleKind {
    /// Returns all variants of this enum, in weight table order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::CrimeTypeMatch,
            Self::MoSimilarity,
            Self::LocationProximity,
            Self::WeaponMatch,
            Self::DigitalEvidence,
            Self::WitnessTestimony,
            Self::SurveillanceFootage,
            Self::FinancialRecords,
            Self::PriorCrimes,
            Self::VictimProfileMatch,
            Self::TimePattern,
            Self::SceneOrganization,
            Self::RiskFactor,
            Self::DangerLevel,
        ]
    }

    /// Returns the hand-tuned starting weight for this rule.
    #[must_use]
    pub const fn initial_weight(self) -> f64 {
        match self {
            Self::CrimeTypeMatch => 25.0,
            Self::MoSimilarity | Self::LocationProximity | Self::WeaponMatch => 20.0,
            Self::SurveillanceFootage => 18.0,
            Self::DigitalEvidence | Self::FinancialRecords | Self::PriorCrimes => 15.0,
            Self::WitnessTestimony | Self::SceneOrganization => 12.0,
            Self::VictimProfileMatch | Self::TimePattern | Self::DangerLevel => 10.0,
            Self::RiskFactor => 8.0,
        }
    }
}

/// Confidence bucket derived from a probability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    /// Score below 20.
    VeryLow,
    /// Score in `[20, 40)`.
    Low,
    /// Score in `[40, 60)`.
    Medium,
    /// Score in `[60, 80)`.
    High,
    /// Score of 80 or above.
    VeryHigh,
}

impl Confidence {
    /// Buckets a probability score. Lower bounds are inclusive.
    #[must_use]
    pub const fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::VeryHigh
        } else if score >= 60.0 {
            Self::High
        } else if score >= 40.0 {
            Self::Medium
        } else if score >= 20.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VeryLow => write!(f, "VERY LOW"),
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::VeryHigh => write!(f, "VERY HIGH"),
        }
    }
}

/// Error returned when a weight update is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    /// The weight value falls outside the permitted range.
    #[error("weight {value} for {rule} is outside {MIN_WEIGHT}..={MAX_WEIGHT}")]
    OutOfRange {
        /// The rule the update targeted.
        rule: RuleKind,
        /// The rejected value.
        value: f64,
    },
}

/// Bounded rule weight table.
///
/// Every entry lies in [`MIN_WEIGHT`]`..=`[`MAX_WEIGHT`]; rules without an
/// entry read as [`DEFAULT_WEIGHT`]. The [`Default`] table carries the
/// hand-tuned operational weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    weights: BTreeMap<RuleKind, f64>,
}

impl Default for WeightTable {
    fn default() -> Self {
        let mut weights = BTreeMap::new();
        for rule in RuleKind::all() {
            weights.insert(*rule, rule.initial_weight());
        }
        Self { weights }
    }
}

impl WeightTable {
    /// Creates a table with no entries; every rule reads as
    /// [`DEFAULT_WEIGHT`].
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Returns the weight for a rule, falling back to [`DEFAULT_WEIGHT`].
    #[must_use]
    pub fn weight(&self, rule: RuleKind) -> f64 {
        self.weights.get(&rule).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Sets the weight for a rule.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::OutOfRange`] if the value is not within
    /// [`MIN_WEIGHT`]`..=`[`MAX_WEIGHT`]. The table is unchanged on error.
    pub fn set_weight(&mut self, rule: RuleKind, value: f64) -> Result<(), WeightError> {
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&value) {
            return Err(WeightError::OutOfRange { rule, value });
        }
        self.weights.insert(rule, value);
        Ok(())
    }

    /// Restores the hand-tuned default table.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// All entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = (RuleKind, f64)> + '_ {
        self.weights.iter().map(|(rule, weight)| (*rule, *weight))
    }

    /// All entries sorted by weight, heaviest first.
    ///
    /// Ties keep table order, so the ranking is deterministic.
    #[must_use]
    pub fn ranked(&self) -> Vec<(RuleKind, f64)> {
        let mut entries: Vec<(RuleKind, f64)> = self.entries().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }

    /// The `n` heaviest entries, heaviest first.
    #[must_use]
    pub fn most_influential(&self, n: usize) -> Vec<(RuleKind, f64)> {
        let mut entries = self.ranked();
        entries.truncate(n);
        entries
    }

    /// The `n` lightest entries, lightest first.
    #[must_use]
    pub fn least_influential(&self, n: usize) -> Vec<(RuleKind, f64)> {
        let mut entries: Vec<(RuleKind, f64)> = self.entries().collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        entries.truncate(n);
        entries
    }
}

/// One candidate's scoring result for a single analysis run.
///
/// A suspect borrows its criminal record and is never persisted; it exists
/// to be ranked, rendered, and dropped. Rule scores are keyed by rule, so
/// re-recording a rule replaces its contribution instead of stacking, and
/// the probability score always equals the capped sum of the entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suspect<'a> {
    criminal: &'a Criminal,
    rule_scores: BTreeMap<RuleKind, f64>,
    matching_factors: Vec<&'static str>,
    reasoning: String,
    probability_score: f64,
}

impl<'a> Suspect<'a> {
    /// Creates an unscored suspect for the given criminal.
    #[must_use]
    pub const fn new(criminal: &'a Criminal) -> Self {
        Self {
            criminal,
            rule_scores: BTreeMap::new(),
            matching_factors: Vec::new(),
            reasoning: String::new(),
            probability_score: 0.0,
        }
    }

    /// Records a triggered rule: its score contribution, its matching
    /// factor label, and its narrative fragment.
    ///
    /// Re-recording a rule replaces the score and leaves the factor list
    /// and narrative untouched, so no rule can double-count.
    pub fn record(&mut self, rule: RuleKind, score: f64, factor: &'static str, fragment: &str) {
        let first_trigger = self.rule_scores.insert(rule, score).is_none();
        if first_trigger {
            self.matching_factors.push(factor);
            self.reasoning.push_str(fragment);
        }
        self.probability_score = self.rule_scores.values().sum::<f64>().min(MAX_PROBABILITY);
    }

    /// Replaces the narrative reasoning wholesale.
    pub fn set_reasoning(&mut self, reasoning: impl Into<String>) {
        self.reasoning = reasoning.into();
    }

    /// The criminal this suspect wraps.
    #[must_use]
    pub const fn criminal(&self) -> &'a Criminal {
        self.criminal
    }

    /// Total probability score in `[0.0, 100.0]`.
    #[must_use]
    pub const fn probability_score(&self) -> f64 {
        self.probability_score
    }

    /// Confidence bucket for the current score.
    #[must_use]
    pub const fn confidence(&self) -> Confidence {
        Confidence::from_score(self.probability_score)
    }

    /// Per-rule score contributions.
    #[must_use]
    pub const fn rule_scores(&self) -> &BTreeMap<RuleKind, f64> {
        &self.rule_scores
    }

    /// The contribution recorded for one rule, if it triggered.
    #[must_use]
    pub fn rule_score(&self, rule: RuleKind) -> Option<f64> {
        self.rule_scores.get(&rule).copied()
    }

    /// Matching factor labels in trigger order, without duplicates.
    #[must_use]
    pub fn matching_factors(&self) -> &[&'static str] {
        &self.matching_factors
    }

    /// Narrative explanation of the score.
    #[must_use]
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }
}
