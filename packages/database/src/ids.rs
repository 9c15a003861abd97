//! Sequential record id generation.
//!
//! Ids follow the canonical registry formats: `CRIM00001` for criminals,
//! `SCENE0001` for scenes, and `SCENE0001-E001` for evidence. Evidence
//! sequences are tracked per scene, so numbering in one scene never
//! perturbs another. The generator is plain serializable state owned by
//! whichever registry constructs records; counters persist with it so a
//! restored snapshot keeps issuing fresh ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sequential id source for criminals, scenes, and evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdGenerator {
    next_criminal: u32,
    next_scene: u32,
    #[serde(default)]
    evidence_counters: BTreeMap<String, u32>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            next_criminal: 1,
            next_scene: 1,
            evidence_counters: BTreeMap::new(),
        }
    }
}

impl IdGenerator {
    /// Creates a generator with all sequences at their starting positions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next criminal id, e.g. `CRIM00007`.
    pub fn next_criminal_id(&mut self) -> String {
        let n = self.next_criminal;
        self.next_criminal += 1;
        format!("CRIM{n:05}")
    }

    /// Issues the next scene id, e.g. `SCENE0003`.
    pub fn next_scene_id(&mut self) -> String {
        let n = self.next_scene;
        self.next_scene += 1;
        format!("SCENE{n:04}")
    }

    /// Issues the next evidence id for a scene, e.g. `SCENE0003-E002`.
    pub fn next_evidence_id(&mut self, scene_id: &str) -> String {
        let counter = self
            .evidence_counters
            .entry(scene_id.to_string())
            .or_insert(1);
        let id = format!("{scene_id}-E{counter:03}");
        *counter += 1;
        id
    }

    /// Drops the evidence sequence for a scene, restarting it at 1.
    pub fn reset_evidence_counter(&mut self, scene_id: &str) {
        self.evidence_counters.remove(scene_id);
    }

    /// Overrides the criminal sequence position, for restoring persisted
    /// state.
    pub const fn set_criminal_counter(&mut self, next: u32) {
        self.next_criminal = next;
    }

    /// Overrides the scene sequence position, for restoring persisted
    /// state.
    pub const fn set_scene_counter(&mut self, next: u32) {
        self.next_scene = next;
    }

    /// Overrides one scene's evidence sequence position.
    pub fn set_evidence_counter(&mut self, scene_id: &str, next: u32) {
        self.evidence_counters.insert(scene_id.to_string(), next);
    }
}
