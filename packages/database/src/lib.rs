#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory criminal registry.
//!
//! [`CriminalDatabase`] owns every criminal and crime scene record, keyed
//! by id, together with the [`IdGenerator`] that issues canonical ids for
//! newly registered records. On top of plain storage it offers
//! case-insensitive searches, point-in-time statistics, and JSON snapshots
//! that carry the id sequences along with the records.

pub mod ids;
pub mod sample;
pub mod validate;

use std::collections::BTreeMap;

use dragnet_case_models::{CaseError, CrimeScene, CrimeType, Evidence, EvidenceKind};
use dragnet_criminal_models::{Criminal, CriminalKind, DangerLevel, Gender};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::IdGenerator;

/// Errors produced by registry operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A record id was empty or blank.
    #[error("record id must not be blank")]
    EmptyId,
    /// A criminal with this id is already registered.
    #[error("criminal {id} is already registered")]
    DuplicateCriminal {
        /// The colliding criminal id.
        id: String,
    },
    /// No criminal with this id is registered.
    #[error("no criminal with id {id}")]
    CriminalNotFound {
        /// The missing criminal id.
        id: String,
    },
    /// A crime scene with this id is already registered.
    #[error("crime scene {id} is already registered")]
    DuplicateScene {
        /// The colliding scene id.
        id: String,
    },
    /// No crime scene with this id is registered.
    #[error("no crime scene with id {id}")]
    SceneNotFound {
        /// The missing scene id.
        id: String,
    },
    /// An input field failed registration validation.
    #[error("invalid {field}: {value:?}")]
    InvalidRecord {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A case record constructor or mutation rejected its input.
    #[error(transparent)]
    Case(#[from] CaseError),
    /// A snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// The in-memory registry of criminals and crime scenes.
///
/// Records live in ordered maps keyed by id, so iteration and serialized
/// snapshots are deterministic. The embedded [`IdGenerator`] backs the
/// `register_*` operations and travels with snapshots, so a restored
/// registry keeps numbering where it left off. Fully constructed records
/// can also be inserted directly with [`Self::add_criminal`] and
/// [`Self::add_scene`], which only enforce id uniqueness.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CriminalDatabase {
    criminals: BTreeMap<String, Criminal>,
    scenes: BTreeMap<String, CrimeScene>,
    #[serde(default)]
    ids: IdGenerator,
}

impl CriminalDatabase {
    /// Creates an empty registry with fresh id sequences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id generator backing registrations.
    #[must_use]
    pub const fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    /// Mutable access to the id generator, for restoring persisted
    /// sequence positions.
    pub const fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Inserts a fully constructed criminal record.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::EmptyId`] for a blank id and
    /// [`DatabaseError::DuplicateCriminal`] if the id is already taken.
    pub fn add_criminal(&mut self, criminal: Criminal) -> Result<(), DatabaseError> {
        if criminal.id().trim().is_empty() {
            return Err(DatabaseError::EmptyId);
        }
        if self.criminals.contains_key(criminal.id()) {
            return Err(DatabaseError::DuplicateCriminal {
                id: criminal.id().to_string(),
            });
        }
        log::info!("Registered criminal {} ({})", criminal.id(), criminal.name());
        self.criminals.insert(criminal.id().to_string(), criminal);
        Ok(())
    }

    /// Deletes a criminal record, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::EmptyId`] for a blank id and
    /// [`DatabaseError::CriminalNotFound`] if no criminal carries the id.
    pub fn remove_criminal(&mut self, id: &str) -> Result<Criminal, DatabaseError> {
        if id.trim().is_empty() {
            return Err(DatabaseError::EmptyId);
        }
        let removed = self
            .criminals
            .remove(id)
            .ok_or_else(|| DatabaseError::CriminalNotFound { id: id.to_string() })?;
        log::info!("Removed criminal {id}");
        Ok(removed)
    }

    /// Replaces an existing criminal record with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::CriminalNotFound`] if no criminal carries
    /// the record's id.
    pub fn update_criminal(&mut self, criminal: Criminal) -> Result<(), DatabaseError> {
        if !self.criminals.contains_key(criminal.id()) {
            return Err(DatabaseError::CriminalNotFound {
                id: criminal.id().to_string(),
            });
        }
        self.criminals.insert(criminal.id().to_string(), criminal);
        Ok(())
    }

    /// Looks up a criminal by id.
    #[must_use]
    pub fn criminal(&self, id: &str) -> Option<&Criminal> {
        self.criminals.get(id)
    }

    /// Mutable lookup of a criminal by id.
    pub fn criminal_mut(&mut self, id: &str) -> Option<&mut Criminal> {
        self.criminals.get_mut(id)
    }

    /// Whether a criminal with the given id is registered.
    #[must_use]
    pub fn has_criminal(&self, id: &str) -> bool {
        self.criminals.contains_key(id)
    }

    /// Number of registered criminals.
    #[must_use]
    pub fn criminal_count(&self) -> usize {
        self.criminals.len()
    }

    /// All registered criminals, ordered by id.
    #[must_use]
    pub fn all_criminals(&self) -> impl Iterator<Item = &Criminal> {
        self.criminals.values()
    }

    /// Inserts a fully constructed crime scene record.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::EmptyId`] for a blank id and
    /// [`DatabaseError::DuplicateScene`] if the id is already taken.
    pub fn add_scene(&mut self, scene: CrimeScene) -> Result<(), DatabaseError> {
        if scene.id().trim().is_empty() {
            return Err(DatabaseError::EmptyId);
        }
        if self.scenes.contains_key(scene.id()) {
            return Err(DatabaseError::DuplicateScene {
                id: scene.id().to_string(),
            });
        }
        log::info!("Registered crime scene {} ({})", scene.id(), scene.crime_type());
        self.scenes.insert(scene.id().to_string(), scene);
        Ok(())
    }

    /// Deletes a scene record, returning it. The scene's evidence id
    /// sequence restarts if the id is ever issued again.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::EmptyId`] for a blank id and
    /// [`DatabaseError::SceneNotFound`] if no scene carries the id.
    pub fn remove_scene(&mut self, id: &str) -> Result<CrimeScene, DatabaseError> {
        if id.trim().is_empty() {
            return Err(DatabaseError::EmptyId);
        }
        let removed = self
            .scenes
            .remove(id)
            .ok_or_else(|| DatabaseError::SceneNotFound { id: id.to_string() })?;
        self.ids.reset_evidence_counter(id);
        log::info!("Removed crime scene {id}");
        Ok(removed)
    }

    /// Looks up a scene by id.
    #[must_use]
    pub fn scene(&self, id: &str) -> Option<&CrimeScene> {
        self.scenes.get(id)
    }

    /// Mutable lookup of a scene by id.
    pub fn scene_mut(&mut self, id: &str) -> Option<&mut CrimeScene> {
        self.scenes.get_mut(id)
    }

    /// Whether a scene with the given id is registered.
    #[must_use]
    pub fn has_scene(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    /// Number of registered scenes.
    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// All registered scenes, ordered by id.
    #[must_use]
    pub fn all_scenes(&self) -> impl Iterator<Item = &CrimeScene> {
        self.scenes.values()
    }

    /// Validates the inputs and registers a new criminal under a freshly
    /// generated id, applying the kind's default behavioral parameters.
    ///
    /// Validation runs before id generation, so a rejected registration
    /// never consumes an id. Returns the generated id.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::InvalidRecord`] if the name or age fails
    /// validation.
    pub fn register_criminal(
        &mut self,
        name: &str,
        age: u32,
        gender: Gender,
        kind: CriminalKind,
    ) -> Result<String, DatabaseError> {
        if !validate::is_valid_name(name) {
            return Err(DatabaseError::InvalidRecord {
                field: "name",
                value: name.to_string(),
            });
        }
        if !validate::is_valid_age(age) {
            return Err(DatabaseError::InvalidRecord {
                field: "age",
                value: age.to_string(),
            });
        }
        let id = self.ids.next_criminal_id();
        self.add_criminal(Criminal::new(id.clone(), name, age, gender, kind))?;
        Ok(id)
    }

    /// Validates the location and registers a new scene under a freshly
    /// generated id.
    ///
    /// Returns the generated id.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::InvalidRecord`] if the location fails
    /// validation.
    pub fn register_scene(
        &mut self,
        crime_type: CrimeType,
        location: &str,
    ) -> Result<String, DatabaseError> {
        if !validate::is_valid_location(location) {
            return Err(DatabaseError::InvalidRecord {
                field: "location",
                value: location.to_string(),
            });
        }
        let id = self.ids.next_scene_id();
        self.add_scene(CrimeScene::new(id.clone(), crime_type, location)?)?;
        Ok(id)
    }

    /// Creates evidence under a freshly generated id and attaches it to
    /// the scene.
    ///
    /// Returns the generated evidence id.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::InvalidRecord`] if the description fails
    /// validation, [`DatabaseError::SceneNotFound`] if the scene is
    /// missing, and [`DatabaseError::Case`] if the scene rejects the item.
    pub fn attach_evidence(
        &mut self,
        scene_id: &str,
        kind: EvidenceKind,
        description: &str,
    ) -> Result<String, DatabaseError> {
        if !validate::is_valid_description(description) {
            return Err(DatabaseError::InvalidRecord {
                field: "description",
                value: description.to_string(),
            });
        }
        let Some(scene) = self.scenes.get_mut(scene_id) else {
            return Err(DatabaseError::SceneNotFound {
                id: scene_id.to_string(),
            });
        };
        let id = self.ids.next_evidence_id(scene_id);
        scene.add_evidence(Evidence::new(id.clone(), kind, description)?)?;
        log::debug!("Attached evidence {id} to scene {scene_id}");
        Ok(id)
    }

    /// Criminals whose names contain the fragment, case-insensitively.
    #[must_use]
    pub fn criminals_by_name(&self, fragment: &str) -> Vec<&Criminal> {
        let needle = fragment.to_lowercase();
        self.criminals
            .values()
            .filter(|criminal| criminal.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Criminals of the given kind.
    #[must_use]
    pub fn criminals_of_kind(&self, kind: CriminalKind) -> Vec<&Criminal> {
        self.criminals
            .values()
            .filter(|criminal| criminal.kind() == kind)
            .collect()
    }

    /// Criminals known to operate in the location.
    #[must_use]
    pub fn criminals_in_location(&self, location: &str) -> Vec<&Criminal> {
        self.criminals
            .values()
            .filter(|criminal| criminal.operates_in_location(location))
            .collect()
    }

    /// Criminals currently at large.
    #[must_use]
    pub fn criminals_at_large(&self) -> Vec<&Criminal> {
        self.criminals
            .values()
            .filter(|criminal| criminal.is_at_large())
            .collect()
    }

    /// Criminals classified as high or extreme danger.
    #[must_use]
    pub fn high_danger_criminals(&self) -> Vec<&Criminal> {
        self.criminals
            .values()
            .filter(|criminal| criminal.danger_level() >= DangerLevel::High)
            .collect()
    }

    /// Scenes recording the given crime type.
    #[must_use]
    pub fn scenes_of_type(&self, crime_type: CrimeType) -> Vec<&CrimeScene> {
        self.scenes
            .values()
            .filter(|scene| scene.crime_type() == crime_type)
            .collect()
    }

    /// Scenes whose locations contain the fragment, case-insensitively.
    #[must_use]
    pub fn scenes_at_location(&self, fragment: &str) -> Vec<&CrimeScene> {
        let needle = fragment.to_lowercase();
        self.scenes
            .values()
            .filter(|scene| scene.location().to_lowercase().contains(&needle))
            .collect()
    }

    /// Computes point-in-time summary statistics over the registry.
    #[must_use]
    pub fn stats(&self) -> DatabaseStats {
        let mut criminals_by_kind = BTreeMap::new();
        let mut criminals_by_danger = BTreeMap::new();
        let mut at_large = 0;
        for criminal in self.criminals.values() {
            *criminals_by_kind.entry(criminal.kind()).or_insert(0) += 1;
            *criminals_by_danger.entry(criminal.danger_level()).or_insert(0) += 1;
            if criminal.is_at_large() {
                at_large += 1;
            }
        }

        let mut scenes_by_crime_type = BTreeMap::new();
        let mut evidence_count = 0;
        for scene in self.scenes.values() {
            *scenes_by_crime_type.entry(scene.crime_type()).or_insert(0) += 1;
            evidence_count += scene.evidence_count();
        }

        DatabaseStats {
            criminal_count: self.criminals.len(),
            scene_count: self.scenes.len(),
            evidence_count,
            criminals_by_kind,
            scenes_by_crime_type,
            criminals_by_danger,
            at_large,
            in_custody: self.criminals.len() - at_large,
        }
    }

    /// Serializes the whole registry, id sequences included, to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Snapshot`] if encoding fails.
    pub fn to_json(&self) -> Result<String, DatabaseError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a registry from a JSON snapshot produced by
    /// [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Snapshot`] if the snapshot cannot be
    /// decoded.
    pub fn from_json(snapshot: &str) -> Result<Self, DatabaseError> {
        Ok(serde_json::from_str(snapshot)?)
    }

    /// Removes every record and restarts the id sequences.
    pub fn clear(&mut self) {
        self.criminals.clear();
        self.scenes.clear();
        self.ids = IdGenerator::default();
        log::info!("Cleared criminal database");
    }
}

/// Point-in-time summary counts for a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStats {
    /// Registered criminal count.
    pub criminal_count: usize,
    /// Registered crime scene count.
    pub scene_count: usize,
    /// Total evidence items across all scenes.
    pub evidence_count: usize,
    /// Criminal counts per kind.
    pub criminals_by_kind: BTreeMap<CriminalKind, usize>,
    /// Scene counts per crime type.
    pub scenes_by_crime_type: BTreeMap<CrimeType, usize>,
    /// Criminal counts per danger level.
    pub criminals_by_danger: BTreeMap<DangerLevel, usize>,
    /// Criminals currently at large.
    pub at_large: usize,
    /// Criminals currently in custody.
    pub in_custody: usize,
}
