#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Criminal taxonomy types and offender profile definitions.
//!
//! This crate defines the canonical offender taxonomy used across the
//! dragnet system: danger levels, the fourteen criminal kinds with their
//! default behavioral parameters, the kind-specific profile payloads, and
//! the [`Criminal`] record itself.

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// How dangerous an offender is considered, from routine to extreme.
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
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum DangerLevel {
    /// Non-violent, low-stakes offending.
    Low,
    /// Capable of escalation but not habitually violent.
    Medium,
    /// Violent or armed offending.
    High,
    /// Lethal or large-scale offending.
    Extreme,
}

impl DangerLevel {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Extreme]
    }
}

/// Recorded gender of a person.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// The fourteen criminal kinds recognized by the profiling taxonomy.
///
/// Each kind carries fixed default behavioral parameters (danger level,
/// risk factor, modus operandi) that a freshly registered [`Criminal`]
/// starts from. Canonical display strings are title-cased with spaces,
/// e.g. `"Serial Killer"`, and parsing is case-insensitive.
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
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum CriminalKind {
    /// Repeat killer with victim selection patterns.
    SerialKiller,
    /// Stealth-based property offender.
    Thief,
    /// Physically violent offender.
    ViolentOffender,
    /// Deception-based financial offender.
    Fraudster,
    /// Deliberate fire-setter.
    Arsonist,
    /// Large-scale drug distributor.
    DrugTrafficker,
    /// Digital intrusion and data theft offender.
    CyberCriminal,
    /// Armed confrontational thief.
    Robber,
    /// Abduction and confinement offender.
    Kidnapper,
    /// Financial obfuscation offender.
    MoneyLaunderer,
    /// Head of an organized criminal enterprise.
    OrganizedCrimeBoss,
    /// Exploitation and trafficking offender.
    HumanTrafficker,
    /// Sexual predation offender.
    SexualOffender,
    /// Ideologically motivated violent offender.
    Terrorist,
}

impl CriminalKind {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SerialKiller,
            Self::Thief,
            Self::ViolentOffender,
            Self::Fraudster,
            Self::Arsonist,
            Self::DrugTrafficker,
            Self::CyberCriminal,
            Self::Robber,
            Self::Kidnapper,
            Self::MoneyLaunderer,
            Self::OrganizedCrimeBoss,
            Self::HumanTrafficker,
            Self::SexualOffender,
            Self::Terrorist,
        ]
    }

    /// Returns the default danger classification for this kind.
    #[must_use]
    pub const fn default_danger_level(self) -> DangerLevel {
        match self {
            Self::Thief => DangerLevel::Low,
            Self::Fraudster | Self::CyberCriminal | Self::MoneyLaunderer => DangerLevel::Medium,
            Self::ViolentOffender | Self::Arsonist | Self::Robber => DangerLevel::High,
            Self::SerialKiller
            | Self::DrugTrafficker
            | Self::Kidnapper
            | Self::OrganizedCrimeBoss
            | Self::HumanTrafficker
            | Self::SexualOffender
            | Self::Terrorist => DangerLevel::Extreme,
        }
    }

    /// Returns the default reoffending risk for this kind, in `[0.0, 1.0]`.
    #[must_use]
    pub const fn default_risk_factor(self) -> f64 {
        match self {
            Self::Thief => 0.3,
            Self::Fraudster | Self::MoneyLaunderer => 0.5,
            Self::CyberCriminal => 0.6,
            Self::Arsonist | Self::Robber => 0.7,
            Self::ViolentOffender => 0.75,
            Self::DrugTrafficker => 0.85,
            Self::Kidnapper | Self::SexualOffender => 0.9,
            Self::SerialKiller | Self::OrganizedCrimeBoss | Self::HumanTrafficker => 0.95,
            Self::Terrorist => 1.0,
        }
    }

    /// Returns the default modus operandi description for this kind.
    #[must_use]
    pub const fn default_modus_operandi(self) -> &'static str {
        match self {
            Self::SerialKiller => "Methodical killing with specific victim selection patterns",
            Self::Thief => "Stealth-based theft operations",
            Self::ViolentOffender => "Violent confrontation with victims",
            Self::Fraudster => "Deception and manipulation for financial gain",
            Self::Arsonist => "Deliberate fire-setting with specific patterns",
            Self::DrugTrafficker => "Large-scale drug distribution network",
            Self::CyberCriminal => "Digital intrusion and data theft",
            Self::Robber => "Armed confrontation for theft",
            Self::Kidnapper => "Abduction and confinement of victims",
            Self::MoneyLaunderer => "Financial obfuscation and legitimization of illegal funds",
            Self::OrganizedCrimeBoss => "Leadership of organized criminal enterprise",
            Self::HumanTrafficker => "Exploitation and trafficking of human beings",
            Self::SexualOffender => "Sexual predation and assault",
            Self::Terrorist => "Ideologically motivated violence against civilians",
        }
    }
}

/// Kind-specific profile payload attached to every [`Criminal`].
///
/// One variant per [`CriminalKind`], carrying the fields that only make
/// sense for that kind. Counters and amounts start at zero; optional text
/// fields start unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KindProfile {
    /// Profile payload for a serial killer.
    SerialKiller {
        /// Recurring signature left at scenes.
        signature: Option<String>,
        /// Confirmed victim count.
        victim_count: u32,
        /// Description of the preferred victim demographic.
        victim_type: Option<String>,
        /// Whether the killings are organized rather than impulsive.
        organized: bool,
        /// Typical interval between killings.
        cooling_off_period: Option<String>,
    },
    /// Profile payload for a thief.
    Thief {
        /// What the thief specializes in stealing.
        specialization: Option<String>,
        /// Estimated total value stolen.
        total_stolen_value: f64,
        /// Preferred target description.
        preferred_target: Option<String>,
        /// Whether the thief works alone.
        works_solo: bool,
    },
    /// Profile payload for a violent offender.
    ViolentOffender {
        /// Preferred weapon description.
        weapon_preference: Option<String>,
        /// Whether the offender shows impulse control.
        impulse_control: bool,
        /// Whether substance abuse is a factor.
        substance_abuse: bool,
        /// What typically triggers the violence.
        trigger_type: Option<String>,
        /// Recorded assault count.
        assault_count: u32,
    },
    /// Profile payload for a fraudster.
    Fraudster {
        /// Primary fraud scheme.
        fraud_type: Option<String>,
        /// Estimated total amount defrauded.
        total_defrauded_amount: f64,
        /// How victims are contacted.
        method_of_contact: Option<String>,
        /// Whether online tooling is used.
        uses_online_tools: bool,
        /// Known victim count.
        victim_count: u32,
    },
    /// Profile payload for an arsonist.
    Arsonist {
        /// Accelerant typically used.
        accelerant_type: Option<String>,
        /// Typical target description.
        target_type: Option<String>,
        /// Motivation for the fires.
        motivation: Option<String>,
        /// Recorded fire count.
        fire_count: u32,
        /// Whether the offender has firefighting knowledge.
        firefighting_knowledge: bool,
    },
    /// Profile payload for a drug trafficker.
    DrugTrafficker {
        /// Primary drug moved.
        primary_drug: Option<String>,
        /// Scale of the operation, e.g. `"LOCAL"` or `"INTERNATIONAL"`.
        operation_scale: String,
        /// Whether cartel connections are established.
        cartel_connections: bool,
        /// Whether violence is used in the operation.
        uses_violence: bool,
        /// Estimated total street value moved.
        total_street_value: f64,
    },
    /// Profile payload for a cyber criminal.
    CyberCriminal {
        /// Technical specialization.
        specialization: Option<String>,
        /// Skill level, e.g. `"INTERMEDIATE"` or `"ADVANCED"`.
        skill_level: String,
        /// Whether the offender operates within a group.
        part_of_group: bool,
        /// Preferred target description.
        preferred_target: Option<String>,
        /// Count of systems compromised.
        systems_compromised: u32,
        /// Estimated financial damage caused.
        financial_damage: f64,
    },
    /// Profile payload for a robber.
    Robber {
        /// Typical target description.
        target_type: Option<String>,
        /// Weapon carried during robberies.
        weapon_type: Option<String>,
        /// Whether robberies are committed in a group.
        works_in_group: bool,
        /// Recorded robbery count.
        robbery_count: u32,
        /// Estimated total value stolen.
        total_stolen: f64,
    },
    /// Profile payload for a kidnapper.
    Kidnapper {
        /// Motivation for abductions.
        motivation: Option<String>,
        /// Whether ransom is demanded.
        demands_ransom: bool,
        /// Known victim count.
        victim_count: u32,
        /// Description of the targeted demographic.
        target_demographic: Option<String>,
        /// Total ransom collected.
        total_ransom: f64,
    },
    /// Profile payload for a money launderer.
    MoneyLaunderer {
        /// Primary laundering method.
        primary_method: Option<String>,
        /// Estimated total laundered.
        total_laundered: f64,
        /// Whether banking connections are established.
        banking_connections: bool,
        /// Front business used for legitimization.
        front_business: Option<String>,
        /// Whether operations cross borders.
        international_operations: bool,
    },
    /// Profile payload for an organized crime boss.
    OrganizedCrimeBoss {
        /// Name of the criminal organization.
        organization_name: Option<String>,
        /// Estimated member count.
        member_count: u32,
        /// Primary criminal activity of the organization.
        primary_activity: Option<String>,
        /// Territory controlled.
        territory: Option<String>,
        /// Whether legal businesses are held as cover.
        legal_businesses: bool,
    },
    /// Profile payload for a human trafficker.
    HumanTrafficker {
        /// Type of trafficking operation.
        trafficking_type: Option<String>,
        /// Known victim count.
        victim_count: u32,
        /// Whether an international network is involved.
        international_network: bool,
        /// Description of the targeted demographic.
        target_demographic: Option<String>,
        /// Whether violence is used against victims.
        uses_violence: bool,
    },
    /// Profile payload for a sexual offender.
    SexualOffender {
        /// Type of offense committed.
        offense_type: Option<String>,
        /// Known victim count.
        victim_count: u32,
        /// Description of the targeted demographic.
        target_demographic: Option<String>,
        /// Whether the offender has reoffended.
        reoffended: bool,
        /// Where victims are typically found.
        hunting_ground: Option<String>,
    },
    /// Profile payload for a terrorist.
    Terrorist {
        /// Ideology driving the offending.
        ideology: Option<String>,
        /// Known organizational affiliation.
        affiliation: Option<String>,
        /// Whether the offender operates within a cell.
        part_of_cell: bool,
        /// Typical target description.
        target_type: Option<String>,
        /// Recorded attack count.
        attack_count: u32,
    },
}

impl KindProfile {
    /// Builds the default payload for the given kind.
    #[must_use]
    pub fn default_for(kind: CriminalKind) -> Self {
        match kind {
            CriminalKind::SerialKiller => Self::SerialKiller {
                signature: None,
                victim_count: 0,
                victim_type: None,
                organized: true,
                cooling_off_period: None,
            },
            CriminalKind::Thief => Self::Thief {
                specialization: None,
                total_stolen_value: 0.0,
                preferred_target: None,
                works_solo: true,
            },
            CriminalKind::ViolentOffender => Self::ViolentOffender {
                weapon_preference: None,
                impulse_control: false,
                substance_abuse: false,
                trigger_type: None,
                assault_count: 0,
            },
            CriminalKind::Fraudster => Self::Fraudster {
                fraud_type: None,
                total_defrauded_amount: 0.0,
                method_of_contact: None,
                uses_online_tools: false,
                victim_count: 0,
            },
            CriminalKind::Arsonist => Self::Arsonist {
                accelerant_type: None,
                target_type: None,
                motivation: None,
                fire_count: 0,
                firefighting_knowledge: false,
            },
            CriminalKind::DrugTrafficker => Self::DrugTrafficker {
                primary_drug: None,
                operation_scale: "LOCAL".to_string(),
                cartel_connections: false,
                uses_violence: false,
                total_street_value: 0.0,
            },
            CriminalKind::CyberCriminal => Self::CyberCriminal {
                specialization: None,
                skill_level: "INTERMEDIATE".to_string(),
                part_of_group: false,
                preferred_target: None,
                systems_compromised: 0,
                financial_damage: 0.0,
            },
            CriminalKind::Robber => Self::Robber {
                target_type: None,
                weapon_type: None,
                works_in_group: false,
                robbery_count: 0,
                total_stolen: 0.0,
            },
            CriminalKind::Kidnapper => Self::Kidnapper {
                motivation: None,
                demands_ransom: false,
                victim_count: 0,
                target_demographic: None,
                total_ransom: 0.0,
            },
            CriminalKind::MoneyLaunderer => Self::MoneyLaunderer {
                primary_method: None,
                total_laundered: 0.0,
                banking_connections: false,
                front_business: None,
                international_operations: false,
            },
            CriminalKind::OrganizedCrimeBoss => Self::OrganizedCrimeBoss {
                organization_name: None,
                member_count: 0,
                primary_activity: None,
                territory: None,
                legal_businesses: false,
            },
            CriminalKind::HumanTrafficker => Self::HumanTrafficker {
                trafficking_type: None,
                victim_count: 0,
                international_network: false,
                target_demographic: None,
                uses_violence: true,
            },
            CriminalKind::SexualOffender => Self::SexualOffender {
                offense_type: None,
                victim_count: 0,
                target_demographic: None,
                reoffended: false,
                hunting_ground: None,
            },
            CriminalKind::Terrorist => Self::Terrorist {
                ideology: None,
                affiliation: None,
                part_of_cell: false,
                target_type: None,
                attack_count: 0,
            },
        }
    }

    /// Returns the kind this payload belongs to.
    #[must_use]
    pub const fn kind(&self) -> CriminalKind {
        match self {
            Self::SerialKiller { .. } => CriminalKind::SerialKiller,
            Self::Thief { .. } => CriminalKind::Thief,
            Self::ViolentOffender { .. } => CriminalKind::ViolentOffender,
            Self::Fraudster { .. } => CriminalKind::Fraudster,
            Self::Arsonist { .. } => CriminalKind::Arsonist,
            Self::DrugTrafficker { .. } => CriminalKind::DrugTrafficker,
            Self::CyberCriminal { .. } => CriminalKind::CyberCriminal,
            Self::Robber { .. } => CriminalKind::Robber,
            Self::Kidnapper { .. } => CriminalKind::Kidnapper,
            Self::MoneyLaunderer { .. } => CriminalKind::MoneyLaunderer,
            Self::OrganizedCrimeBoss { .. } => CriminalKind::OrganizedCrimeBoss,
            Self::HumanTrafficker { .. } => CriminalKind::HumanTrafficker,
            Self::SexualOffender { .. } => CriminalKind::SexualOffender,
            Self::Terrorist { .. } => CriminalKind::Terrorist,
        }
    }

    /// Returns the declared weapon preference, for the kinds that carry one.
    ///
    /// Only violent offenders and robbers declare a weapon; every other
    /// kind returns `None`.
    #[must_use]
    pub fn weapon_preference(&self) -> Option<&str> {
        match self {
            Self::ViolentOffender {
                weapon_preference, ..
            } => weapon_preference.as_deref(),
            Self::Robber { weapon_type, .. } => weapon_type.as_deref(),
            _ => None,
        }
    }

    /// Returns the preferred victim demographic, for serial killers only.
    ///
    /// Other kinds that track a target demographic deliberately do not
    /// participate in victim profile matching.
    #[must_use]
    pub fn victim_type(&self) -> Option<&str> {
        match self {
            Self::SerialKiller { victim_type, .. } => victim_type.as_deref(),
            _ => None,
        }
    }
}

/// A registered offender record.
///
/// Construction applies the kind defaults for danger level, risk factor,
/// and modus operandi. The risk factor is clamped to `[0.0, 1.0]` on every
/// write; known locations and prior crimes ignore exact-duplicate
/// insertions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criminal {
    id: String,
    name: String,
    age: u32,
    gender: Gender,
    modus_operandi: String,
    psychological_profile: Option<String>,
    known_locations: Vec<String>,
    prior_crimes: Vec<String>,
    at_large: bool,
    danger_level: DangerLevel,
    #[serde(deserialize_with = "clamped_risk")]
    risk_factor: f64,
    profile: KindProfile,
}

fn clamped_risk<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    })
}

impl Criminal {
    /// Creates a criminal of the given kind with the kind's default payload.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        kind: CriminalKind,
    ) -> Self {
        Self::with_profile(id, name, age, gender, KindProfile::default_for(kind))
    }

    /// Creates a criminal from a fully specified profile payload.
    ///
    /// Danger level, risk factor, and modus operandi start from the
    /// defaults of the payload's kind.
    #[must_use]
    pub fn with_profile(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        profile: KindProfile,
    ) -> Self {
        let kind = profile.kind();
        Self {
            id: id.into(),
            name: name.into(),
            age,
            gender,
            modus_operandi: kind.default_modus_operandi().to_string(),
            psychological_profile: None,
            known_locations: Vec::new(),
            prior_crimes: Vec::new(),
            at_large: true,
            danger_level: kind.default_danger_level(),
            risk_factor: kind.default_risk_factor(),
            profile,
        }
    }

    /// Record identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Recorded gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Current modus operandi description.
    #[must_use]
    pub fn modus_operandi(&self) -> &str {
        &self.modus_operandi
    }

    /// Psychological profile notes, if recorded.
    #[must_use]
    pub fn psychological_profile(&self) -> Option<&str> {
        self.psychological_profile.as_deref()
    }

    /// Locations this criminal is known to operate in, in insertion order.
    #[must_use]
    pub fn known_locations(&self) -> &[String] {
        &self.known_locations
    }

    /// Crime type names this criminal has previously committed.
    #[must_use]
    pub fn prior_crimes(&self) -> &[String] {
        &self.prior_crimes
    }

    /// Whether the criminal is currently at large.
    #[must_use]
    pub const fn is_at_large(&self) -> bool {
        self.at_large
    }

    /// Current danger classification.
    #[must_use]
    pub const fn danger_level(&self) -> DangerLevel {
        self.danger_level
    }

    /// Reoffending risk in `[0.0, 1.0]`.
    #[must_use]
    pub const fn risk_factor(&self) -> f64 {
        self.risk_factor
    }

    /// Kind-specific profile payload.
    #[must_use]
    pub const fn profile(&self) -> &KindProfile {
        &self.profile
    }

    /// Mutable access to the kind-specific profile payload.
    pub const fn profile_mut(&mut self) -> &mut KindProfile {
        &mut self.profile
    }

    /// Criminal kind, derived from the profile payload.
    #[must_use]
    pub const fn kind(&self) -> CriminalKind {
        self.profile.kind()
    }

    /// Replaces the modus operandi description.
    pub fn set_modus_operandi(&mut self, modus_operandi: impl Into<String>) {
        self.modus_operandi = modus_operandi.into();
    }

    /// Records psychological profile notes.
    pub fn set_psychological_profile(&mut self, profile: impl Into<String>) {
        self.psychological_profile = Some(profile.into());
    }

    /// Updates the danger classification.
    pub const fn set_danger_level(&mut self, level: DangerLevel) {
        self.danger_level = level;
    }

    /// Updates the reoffending risk, clamping into `[0.0, 1.0]`.
    ///
    /// A NaN risk is stored as `0.0` so that downstream score ordering
    /// stays total.
    pub fn set_risk_factor(&mut self, risk: f64) {
        self.risk_factor = if risk.is_nan() {
            0.0
        } else {
            risk.clamp(0.0, 1.0)
        };
    }

    /// Marks the criminal as at large or in custody.
    pub const fn set_at_large(&mut self, at_large: bool) {
        self.at_large = at_large;
    }

    /// Adds a known operating location. Exact duplicates are ignored.
    pub fn add_known_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        if !self.known_locations.contains(&location) {
            self.known_locations.push(location);
        }
    }

    /// Adds a prior crime type name. Exact duplicates are ignored.
    pub fn add_prior_crime(&mut self, crime: impl Into<String>) {
        let crime = crime.into();
        if !self.prior_crimes.contains(&crime) {
            self.prior_crimes.push(crime);
        }
    }

    /// Whether this criminal is known to operate in the given location.
    ///
    /// Comparison is case-insensitive on the whole location name.
    #[must_use]
    pub fn operates_in_location(&self, location: &str) -> bool {
        self.known_locations
            .iter()
            .any(|known| known.eq_ignore_ascii_case(location))
    }

    /// Whether this criminal has previously committed the given crime type.
    ///
    /// Comparison is case-insensitive on the whole crime type name.
    #[must_use]
    pub fn has_committed(&self, crime: &str) -> bool {
        self.prior_crimes
            .iter()
            .any(|prior| prior.eq_ignore_ascii_case(crime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn kind_defaults_applied_on_construction() {
        let criminal = Criminal::new(
            "CRIM00001",
            "Omar Siddiqui",
            36,
            Gender::Male,
            CriminalKind::SerialKiller,
        );
        assert_eq!(criminal.kind(), CriminalKind::SerialKiller);
        assert_eq!(criminal.danger_level(), DangerLevel::Extreme);
        assert!(approx(criminal.risk_factor(), 0.95));
        assert_eq!(
            criminal.modus_operandi(),
            "Methodical killing with specific victim selection patterns"
        );
        assert!(criminal.is_at_large());
        assert!(criminal.known_locations().is_empty());
    }

    #[test]
    fn every_kind_has_sane_defaults() {
        for kind in CriminalKind::all() {
            let risk = kind.default_risk_factor();
            assert!((0.0..=1.0).contains(&risk), "{kind:?} risk {risk} invalid");
            assert!(!kind.default_modus_operandi().is_empty());
        }
    }

    #[test]
    fn default_profile_matches_kind() {
        for kind in CriminalKind::all() {
            assert_eq!(KindProfile::default_for(*kind).kind(), *kind);
        }
    }

    #[test]
    fn risk_factor_clamped() {
        let mut criminal =
            Criminal::new("CRIM00002", "A B", 30, Gender::Other, CriminalKind::Thief);
        criminal.set_risk_factor(1.5);
        assert!(approx(criminal.risk_factor(), 1.0));
        criminal.set_risk_factor(-0.2);
        assert!(approx(criminal.risk_factor(), 0.0));
        criminal.set_risk_factor(f64::NAN);
        assert!(approx(criminal.risk_factor(), 0.0));
    }

    #[test]
    fn location_membership_ignores_case() {
        let mut criminal = Criminal::new(
            "CRIM00003",
            "Imran Gul",
            31,
            Gender::Male,
            CriminalKind::ViolentOffender,
        );
        criminal.add_known_location("Lahore");
        assert!(criminal.operates_in_location("lahore"));
        assert!(criminal.operates_in_location("LAHORE"));
        assert!(!criminal.operates_in_location("Karachi"));
    }

    #[test]
    fn exact_duplicate_locations_ignored() {
        let mut criminal =
            Criminal::new("CRIM00004", "T M", 28, Gender::Male, CriminalKind::Thief);
        criminal.add_known_location("Karachi");
        criminal.add_known_location("Karachi");
        assert_eq!(criminal.known_locations().len(), 1);
        // Case-different spellings are distinct entries; only membership
        // queries fold case.
        criminal.add_known_location("karachi");
        assert_eq!(criminal.known_locations().len(), 2);
    }

    #[test]
    fn prior_crime_membership_ignores_case() {
        let mut criminal = Criminal::new(
            "CRIM00005",
            "Z Q",
            41,
            Gender::Female,
            CriminalKind::Fraudster,
        );
        criminal.add_prior_crime("Fraud");
        assert!(criminal.has_committed("fraud"));
        assert!(!criminal.has_committed("Murder"));
    }

    #[test]
    fn weapon_preference_capability() {
        let offender = KindProfile::ViolentOffender {
            weapon_preference: Some("Knife and blunt objects".to_string()),
            impulse_control: false,
            substance_abuse: true,
            trigger_type: None,
            assault_count: 7,
        };
        assert_eq!(offender.weapon_preference(), Some("Knife and blunt objects"));

        let robber = KindProfile::Robber {
            target_type: None,
            weapon_type: Some("Pistol".to_string()),
            works_in_group: true,
            robbery_count: 12,
            total_stolen: 0.0,
        };
        assert_eq!(robber.weapon_preference(), Some("Pistol"));

        let thief = KindProfile::default_for(CriminalKind::Thief);
        assert_eq!(thief.weapon_preference(), None);
    }

    #[test]
    fn victim_type_only_for_serial_killers() {
        let killer = KindProfile::SerialKiller {
            signature: None,
            victim_count: 5,
            victim_type: Some("Young women in their twenties".to_string()),
            organized: true,
            cooling_off_period: None,
        };
        assert_eq!(
            killer.victim_type(),
            Some("Young women in their twenties")
        );

        let kidnapper = KindProfile::Kidnapper {
            motivation: None,
            demands_ransom: true,
            victim_count: 3,
            target_demographic: Some("Children of wealthy families".to_string()),
            total_ransom: 0.0,
        };
        assert_eq!(kidnapper.victim_type(), None);
    }

    #[test]
    fn kind_strings_round_trip() {
        assert_eq!(CriminalKind::SerialKiller.to_string(), "Serial Killer");
        assert_eq!(
            CriminalKind::OrganizedCrimeBoss.to_string(),
            "Organized Crime Boss"
        );
        assert_eq!(
            "cyber criminal".parse::<CriminalKind>(),
            Ok(CriminalKind::CyberCriminal)
        );
        assert_eq!(
            "SERIAL KILLER".parse::<CriminalKind>(),
            Ok(CriminalKind::SerialKiller)
        );
        assert!("mastermind".parse::<CriminalKind>().is_err());
    }

    #[test]
    fn danger_levels_are_ordered() {
        assert!(DangerLevel::Extreme > DangerLevel::High);
        assert!(DangerLevel::High > DangerLevel::Medium);
        assert_eq!("extreme".parse::<DangerLevel>(), Ok(DangerLevel::Extreme));
        assert_eq!(DangerLevel::Extreme.to_string(), "EXTREME");
    }
}
