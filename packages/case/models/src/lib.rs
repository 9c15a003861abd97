#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime scene and evidence record types.
//!
//! This crate defines the case-side data model: the closed crime type and
//! evidence kind vocabularies, individual [`Evidence`] items with their
//! free-form attribute maps, and the [`CrimeScene`] record that aggregates
//! them. Scenes own their evidence; evidence ids are unique within a scene.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Errors produced by case record construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// A crime type string did not match any known crime type.
    #[error("unknown crime type: {0}")]
    UnknownCrimeType(String),
    /// An evidence kind string did not match any known evidence kind.
    #[error("unknown evidence kind: {0}")]
    UnknownEvidenceKind(String),
    /// A required text field was empty or blank.
    #[error("{field} must not be blank")]
    BlankField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Evidence with the same id is already attached to the scene.
    #[error("evidence {id} is already attached to this scene")]
    DuplicateEvidence {
        /// The colliding evidence id.
        id: String,
    },
    /// No evidence with the given id is attached to the scene.
    #[error("no evidence with id {id} on this scene")]
    EvidenceNotFound {
        /// The missing evidence id.
        id: String,
    },
    /// A timestamp was set in the future.
    #[error("{field} must not be in the future")]
    FutureTimestamp {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// The fourteen crime types recognized by the case taxonomy.
///
/// Canonical names are the `PascalCase` variant names, e.g. `"CyberCrime"`;
/// parsing is case-insensitive, so `"cybercrime"` resolves too.
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
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase", ascii_case_insensitive)]
pub enum CrimeType {
    /// Unlawful killing.
    Murder,
    /// Taking property by stealth.
    Theft,
    /// Physical attack on a person.
    Assault,
    /// Deception for financial gain.
    Fraud,
    /// Deliberate fire-setting.
    Arson,
    /// Abduction and confinement.
    Kidnapping,
    /// Digital intrusion or online offending.
    CyberCrime,
    /// Activity of an organized criminal enterprise.
    OrganizedCrime,
    /// Distribution of controlled substances.
    DrugTrafficking,
    /// Exploitation and trafficking of persons.
    HumanTrafficking,
    /// Taking property by force or threat.
    Robbery,
    /// Forcible sexual offense.
    SexualAssault,
    /// Ideologically motivated violence.
    Terrorism,
    /// Legitimization of illegally obtained funds.
    MoneyLaundering,
}

impl CrimeType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Murder,
            Self::Theft,
            Self::Assault,
            Self::Fraud,
            Self::Arson,
            Self::Kidnapping,
            Self::CyberCrime,
            Self::OrganizedCrime,
            Self::DrugTrafficking,
            Self::HumanTrafficking,
            Self::Robbery,
            Self::SexualAssault,
            Self::Terrorism,
            Self::MoneyLaundering,
        ]
    }

    /// Parses a crime type from its name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::UnknownCrimeType`] carrying the offending string
    /// when the name matches no known crime type.
    pub fn from_name(name: &str) -> Result<Self, CaseError> {
        name.parse()
            .map_err(|_| CaseError::UnknownCrimeType(name.to_string()))
    }
}

/// The kinds of evidence that can be collected at a crime scene.
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
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase", ascii_case_insensitive)]
pub enum EvidenceKind {
    /// A weapon or weapon fragment.
    Weapon,
    /// Digital artifacts: devices, logs, malware.
    Digital,
    /// A witness statement.
    Witness,
    /// Paper or electronic documents.
    Document,
    /// Fiber or fabric traces.
    Fiber,
    /// Ballistic material: casings, projectiles.
    Ballistic,
    /// Generic trace material.
    Trace,
    /// Toxicological samples.
    Toxicology,
    /// Surveillance recordings.
    Surveillance,
    /// Financial records: ledgers, transfers, accounts.
    Financial,
}

impl EvidenceKind {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Weapon,
            Self::Digital,
            Self::Witness,
            Self::Document,
            Self::Fiber,
            Self::Ballistic,
            Self::Trace,
            Self::Toxicology,
            Self::Surveillance,
            Self::Financial,
        ]
    }

    /// Parses an evidence kind from its name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::UnknownEvidenceKind`] carrying the offending
    /// string when the name matches no known kind.
    pub fn from_name(name: &str) -> Result<Self, CaseError> {
        name.parse()
            .map_err(|_| CaseError::UnknownEvidenceKind(name.to_string()))
    }
}

/// A single item of evidence collected at a crime scene.
///
/// Identity is the evidence id. Free-form key/value attributes carry
/// kind-specific detail, e.g. a `"type"` attribute on weapon evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    id: String,
    kind: EvidenceKind,
    description: String,
    location: Option<String>,
    collected_at: DateTime<Utc>,
    collected_by: Option<String>,
    attributes: BTreeMap<String, String>,
}

impl Evidence {
    /// Creates a new evidence item collected now.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::BlankField`] if the id or description is blank.
    pub fn new(
        id: impl Into<String>,
        kind: EvidenceKind,
        description: impl Into<String>,
    ) -> Result<Self, CaseError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CaseError::BlankField { field: "evidence id" });
        }
        let description = description.into();
        if description.trim().is_empty() {
            return Err(CaseError::BlankField {
                field: "evidence description",
            });
        }
        Ok(Self {
            id,
            kind,
            description,
            location: None,
            collected_at: Utc::now(),
            collected_by: None,
            attributes: BTreeMap::new(),
        })
    }

    /// Evidence identifier, unique within its scene.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Kind of evidence.
    #[must_use]
    pub const fn kind(&self) -> EvidenceKind {
        self.kind
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Where within the scene the item was found, if recorded.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// When the item was collected.
    #[must_use]
    pub const fn collected_at(&self) -> DateTime<Utc> {
        self.collected_at
    }

    /// Who collected the item, if recorded.
    #[must_use]
    pub fn collected_by(&self) -> Option<&str> {
        self.collected_by.as_deref()
    }

    /// All kind-specific attributes, ordered by key.
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Looks up a single attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::BlankField`] if the description is blank.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), CaseError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(CaseError::BlankField {
                field: "evidence description",
            });
        }
        self.description = description;
        Ok(())
    }

    /// Records where the item was found.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = Some(location.into());
    }

    /// Updates the collection timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::FutureTimestamp`] if the timestamp lies in the
    /// future.
    pub fn set_collected_at(&mut self, collected_at: DateTime<Utc>) -> Result<(), CaseError> {
        if collected_at > Utc::now() {
            return Err(CaseError::FutureTimestamp {
                field: "collection time",
            });
        }
        self.collected_at = collected_at;
        Ok(())
    }

    /// Records who collected the item.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::BlankField`] if the collector name is blank.
    pub fn set_collected_by(&mut self, collector: impl Into<String>) -> Result<(), CaseError> {
        let collector = collector.into();
        if collector.trim().is_empty() {
            return Err(CaseError::BlankField { field: "collector" });
        }
        self.collected_by = Some(collector);
        Ok(())
    }

    /// Sets a kind-specific attribute, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::BlankField`] if the key is blank.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), CaseError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(CaseError::BlankField {
                field: "attribute key",
            });
        }
        self.attributes.insert(key, value.into());
        Ok(())
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }
}

/// A recorded crime scene with its evidence and observed characteristics.
///
/// Evidence ids are unique within the scene; attaching a duplicate id is
/// rejected. Collection accessors expose shared borrows only, so callers
/// cannot mutate scene internals except through the scene's own methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeScene {
    id: String,
    crime_type: CrimeType,
    location: String,
    description: Option<String>,
    time_of_crime: DateTime<Utc>,
    discovered_at: DateTime<Utc>,
    evidence: Vec<Evidence>,
    characteristics: BTreeMap<String, String>,
    victim_profile: Option<String>,
    weather: Option<String>,
    secured: bool,
    lead_investigator: Option<String>,
}

impl CrimeScene {
    /// Creates a new scene record. Both timestamps default to now.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::BlankField`] if the id or location is blank.
    pub fn new(
        id: impl Into<String>,
        crime_type: CrimeType,
        location: impl Into<String>,
    ) -> Result<Self, CaseError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CaseError::BlankField { field: "scene id" });
        }
        let location = location.into();
        if location.trim().is_empty() {
            return Err(CaseError::BlankField {
                field: "scene location",
            });
        }
        let now = Utc::now();
        Ok(Self {
            id,
            crime_type,
            location,
            description: None,
            time_of_crime: now,
            discovered_at: now,
            evidence: Vec::new(),
            characteristics: BTreeMap::new(),
            victim_profile: None,
            weather: None,
            secured: false,
            lead_investigator: None,
        })
    }

    /// Scene identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Crime type committed at this scene.
    #[must_use]
    pub const fn crime_type(&self) -> CrimeType {
        self.crime_type
    }

    /// Where the crime happened.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Narrative description of the scene, if recorded.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Estimated time the crime occurred.
    #[must_use]
    pub const fn time_of_crime(&self) -> DateTime<Utc> {
        self.time_of_crime
    }

    /// When the scene was discovered.
    #[must_use]
    pub const fn discovered_at(&self) -> DateTime<Utc> {
        self.discovered_at
    }

    /// All evidence attached to this scene, in collection order.
    #[must_use]
    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    /// Looks up evidence by id.
    #[must_use]
    pub fn evidence_by_id(&self, id: &str) -> Option<&Evidence> {
        self.evidence.iter().find(|item| item.id() == id)
    }

    /// Mutable lookup of evidence by id.
    pub fn evidence_mut(&mut self, id: &str) -> Option<&mut Evidence> {
        self.evidence.iter_mut().find(|item| item.id() == id)
    }

    /// All evidence of the given kind, in collection order.
    #[must_use]
    pub fn evidence_of_kind(&self, kind: EvidenceKind) -> Vec<&Evidence> {
        self.evidence
            .iter()
            .filter(|item| item.kind() == kind)
            .collect()
    }

    /// Whether any evidence of the given kind is attached.
    #[must_use]
    pub fn has_evidence_kind(&self, kind: EvidenceKind) -> bool {
        self.evidence.iter().any(|item| item.kind() == kind)
    }

    /// Number of evidence items attached.
    #[must_use]
    pub fn evidence_count(&self) -> usize {
        self.evidence.len()
    }

    /// All observed scene characteristics, ordered by key.
    #[must_use]
    pub const fn characteristics(&self) -> &BTreeMap<String, String> {
        &self.characteristics
    }

    /// Looks up a single characteristic value.
    #[must_use]
    pub fn characteristic(&self, key: &str) -> Option<&str> {
        self.characteristics.get(key).map(String::as_str)
    }

    /// Whether a characteristic has been recorded under the given key.
    #[must_use]
    pub fn has_characteristic(&self, key: &str) -> bool {
        self.characteristics.contains_key(key)
    }

    /// Description of the victim, if recorded.
    #[must_use]
    pub fn victim_profile(&self) -> Option<&str> {
        self.victim_profile.as_deref()
    }

    /// Weather at the time of the crime, if recorded.
    #[must_use]
    pub fn weather(&self) -> Option<&str> {
        self.weather.as_deref()
    }

    /// Whether the scene is currently secured.
    #[must_use]
    pub const fn is_secured(&self) -> bool {
        self.secured
    }

    /// The investigator who secured the scene, if any.
    #[must_use]
    pub fn lead_investigator(&self) -> Option<&str> {
        self.lead_investigator.as_deref()
    }

    /// Attaches evidence to the scene.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::DuplicateEvidence`] if evidence with the same id
    /// is already attached.
    pub fn add_evidence(&mut self, evidence: Evidence) -> Result<(), CaseError> {
        if self.evidence_by_id(evidence.id()).is_some() {
            return Err(CaseError::DuplicateEvidence {
                id: evidence.id().to_string(),
            });
        }
        self.evidence.push(evidence);
        Ok(())
    }

    /// Detaches evidence from the scene, returning the removed item.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::EvidenceNotFound`] if no evidence carries the
    /// given id.
    pub fn remove_evidence(&mut self, id: &str) -> Result<Evidence, CaseError> {
        let position = self
            .evidence
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| CaseError::EvidenceNotFound { id: id.to_string() })?;
        Ok(self.evidence.remove(position))
    }

    /// Records a scene characteristic, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::BlankField`] if the key is blank.
    pub fn set_characteristic(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), CaseError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(CaseError::BlankField {
                field: "characteristic key",
            });
        }
        self.characteristics.insert(key, value.into());
        Ok(())
    }

    /// Sets the narrative description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Records the victim description.
    pub fn set_victim_profile(&mut self, profile: impl Into<String>) {
        self.victim_profile = Some(profile.into());
    }

    /// Records the weather at the time of the crime.
    pub fn set_weather(&mut self, weather: impl Into<String>) {
        self.weather = Some(weather.into());
    }

    /// Updates the estimated time of the crime.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::FutureTimestamp`] if the timestamp lies in the
    /// future.
    pub fn set_time_of_crime(&mut self, time: DateTime<Utc>) -> Result<(), CaseError> {
        if time > Utc::now() {
            return Err(CaseError::FutureTimestamp {
                field: "time of crime",
            });
        }
        self.time_of_crime = time;
        Ok(())
    }

    /// Updates the discovery timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::FutureTimestamp`] if the timestamp lies in the
    /// future.
    pub fn set_discovered_at(&mut self, time: DateTime<Utc>) -> Result<(), CaseError> {
        if time > Utc::now() {
            return Err(CaseError::FutureTimestamp {
                field: "discovery time",
            });
        }
        self.discovered_at = time;
        Ok(())
    }

    /// Secures the scene under the given lead investigator.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::BlankField`] if the investigator name is blank.
    pub fn secure(&mut self, investigator: impl Into<String>) -> Result<(), CaseError> {
        let investigator = investigator.into();
        if investigator.trim().is_empty() {
            return Err(CaseError::BlankField {
                field: "investigator",
            });
        }
        self.secured = true;
        self.lead_investigator = Some(investigator);
        Ok(())
    }

    /// Releases the scene. The lead investigator stays on record.
    pub const fn release(&mut self) {
        self.secured = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn scene() -> CrimeScene {
        CrimeScene::new("SCENE0001", CrimeType::Murder, "Lahore").unwrap()
    }

    #[test]
    fn parses_crime_types_case_insensitively() {
        assert_eq!(CrimeType::from_name("murder"), Ok(CrimeType::Murder));
        assert_eq!(
            CrimeType::from_name("ORGANIZEDCRIME"),
            Ok(CrimeType::OrganizedCrime)
        );
        assert_eq!(
            CrimeType::from_name("CyberCrime"),
            Ok(CrimeType::CyberCrime)
        );
        assert_eq!(
            CrimeType::from_name("piracy"),
            Err(CaseError::UnknownCrimeType("piracy".to_string()))
        );
    }

    #[test]
    fn parses_evidence_kinds() {
        assert_eq!(
            EvidenceKind::from_name("surveillance"),
            Ok(EvidenceKind::Surveillance)
        );
        assert_eq!(
            EvidenceKind::from_name("hearsay"),
            Err(CaseError::UnknownEvidenceKind("hearsay".to_string()))
        );
    }

    #[test]
    fn evidence_requires_id_and_description() {
        assert!(Evidence::new("  ", EvidenceKind::Weapon, "A knife").is_err());
        assert!(Evidence::new("E001", EvidenceKind::Weapon, " ").is_err());
        assert!(Evidence::new("E001", EvidenceKind::Weapon, "A knife").is_ok());
    }

    #[test]
    fn evidence_attributes_round_trip() {
        let mut item = Evidence::new("E001", EvidenceKind::Weapon, "Serrated knife").unwrap();
        item.set_attribute("type", "knife").unwrap();
        assert_eq!(item.attribute("type"), Some("knife"));
        assert!(item.set_attribute(" ", "x").is_err());
        assert_eq!(item.remove_attribute("type"), Some("knife".to_string()));
        assert_eq!(item.attribute("type"), None);
    }

    #[test]
    fn scene_requires_id_and_location() {
        assert!(CrimeScene::new("", CrimeType::Theft, "Karachi").is_err());
        assert!(CrimeScene::new("SCENE0002", CrimeType::Theft, "  ").is_err());
    }

    #[test]
    fn duplicate_evidence_rejected() {
        let mut scene = scene();
        let first = Evidence::new("SCENE0001-E001", EvidenceKind::Weapon, "Knife").unwrap();
        let second = Evidence::new("SCENE0001-E001", EvidenceKind::Fiber, "Wool fibers").unwrap();
        scene.add_evidence(first).unwrap();
        assert_eq!(
            scene.add_evidence(second),
            Err(CaseError::DuplicateEvidence {
                id: "SCENE0001-E001".to_string()
            })
        );
        assert_eq!(scene.evidence_count(), 1);
    }

    #[test]
    fn removing_missing_evidence_fails() {
        let mut scene = scene();
        assert_eq!(
            scene.remove_evidence("SCENE0001-E009"),
            Err(CaseError::EvidenceNotFound {
                id: "SCENE0001-E009".to_string()
            })
        );
    }

    #[test]
    fn evidence_kind_queries() {
        let mut scene = scene();
        scene
            .add_evidence(Evidence::new("E001", EvidenceKind::Weapon, "Knife").unwrap())
            .unwrap();
        scene
            .add_evidence(
                Evidence::new("E002", EvidenceKind::Surveillance, "CCTV footage").unwrap(),
            )
            .unwrap();
        assert!(scene.has_evidence_kind(EvidenceKind::Weapon));
        assert!(!scene.has_evidence_kind(EvidenceKind::Witness));
        assert_eq!(scene.evidence_of_kind(EvidenceKind::Surveillance).len(), 1);
        assert!(scene.evidence_by_id("E002").is_some());
    }

    #[test]
    fn future_timestamps_rejected() {
        let mut scene = scene();
        let future = Utc::now() + Duration::days(1);
        assert_eq!(
            scene.set_time_of_crime(future),
            Err(CaseError::FutureTimestamp {
                field: "time of crime"
            })
        );
        let past = Utc::now() - Duration::hours(6);
        assert!(scene.set_time_of_crime(past).is_ok());
        assert_eq!(scene.time_of_crime(), past);

        let mut item = Evidence::new("E001", EvidenceKind::Trace, "Soil sample").unwrap();
        assert!(item.set_collected_at(future).is_err());
        assert!(item.set_collected_at(past).is_ok());
    }

    #[test]
    fn characteristics_round_trip() {
        let mut scene = scene();
        scene.set_characteristic("organization", "organized").unwrap();
        assert!(scene.has_characteristic("organization"));
        assert_eq!(scene.characteristic("organization"), Some("organized"));
        assert!(scene.set_characteristic("", "x").is_err());
    }

    #[test]
    fn securing_requires_investigator() {
        let mut scene = scene();
        assert!(scene.secure("   ").is_err());
        assert!(!scene.is_secured());
        scene.secure("DSP Noor Fatima").unwrap();
        assert!(scene.is_secured());
        assert_eq!(scene.lead_investigator(), Some("DSP Noor Fatima"));
        scene.release();
        assert!(!scene.is_secured());
        assert_eq!(scene.lead_investigator(), Some("DSP Noor Fatima"));
    }
}
