#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Weighted rule evaluation and suspect ranking.
//!
//! [`RuleEngine`] scores candidate criminals against a crime scene by
//! running seven fixed rule families over each (criminal, scene) pair.
//! Every triggered rule contributes the current table weight for its
//! identifier, records a matching-factor label, and appends a narrative
//! fragment, so each ranked suspect carries an explanation of its score.

pub mod config;

use dragnet_case_models::{CrimeScene, CrimeType, Evidence, EvidenceKind};
use dragnet_criminal_models::{Criminal, CriminalKind, DangerLevel};
use dragnet_engine_models::{RuleKind, Suspect, WeightError, WeightTable};

/// Fraction of the surveillance weight granted per surveillance evidence.
const SURVEILLANCE_MULTIPLIER: f64 = 0.5;

/// Fraction of the witness weight granted per witness statement.
const WITNESS_MULTIPLIER: f64 = 0.7;

/// Risk factor above which the risk rule triggers (exclusive).
const RISK_THRESHOLD: f64 = 0.7;

/// Maps each crime type to the criminal kind with direct affinity for it.
///
/// The pairing is one-to-one, but the crime-type rule matches over it by
/// name containment on both sides rather than by kind equality, so the
/// composite sexual assault type name also reaches violent offenders.
#[must_use]
pub const fn expected_kind(crime_type: CrimeType) -> CriminalKind {
    match crime_type {
        CrimeType::Murder => CriminalKind::SerialKiller,
        CrimeType::Theft => CriminalKind::Thief,
        CrimeType::Assault => CriminalKind::ViolentOffender,
        CrimeType::Fraud => CriminalKind::Fraudster,
        CrimeType::Arson => CriminalKind::Arsonist,
        CrimeType::Kidnapping => CriminalKind::Kidnapper,
        CrimeType::CyberCrime => CriminalKind::CyberCriminal,
        CrimeType::OrganizedCrime => CriminalKind::OrganizedCrimeBoss,
        CrimeType::DrugTrafficking => CriminalKind::DrugTrafficker,
        CrimeType::HumanTrafficking => CriminalKind::HumanTrafficker,
        CrimeType::Robbery => CriminalKind::Robber,
        CrimeType::SexualAssault => CriminalKind::SexualOffender,
        CrimeType::Terrorism => CriminalKind::Terrorist,
        CrimeType::MoneyLaundering => CriminalKind::MoneyLaunderer,
    }
}

/// The weighted rule engine.
///
/// Owns a [`WeightTable`] and evaluates candidates against scenes. An
/// analysis run borrows the engine immutably, so weights cannot change
/// mid-ranking; mutation is an administrative operation between runs.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    weights: WeightTable,
}

impl RuleEngine {
    /// Creates an engine with the default weight table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with an already-configured weight table.
    #[must_use]
    pub const fn with_weights(weights: WeightTable) -> Self {
        Self { weights }
    }

    /// The current weight table.
    #[must_use]
    pub const fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Updates one rule weight.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::OutOfRange`] if the value is outside the
    /// permitted weight range. The table is unchanged on error.
    pub fn set_weight(&mut self, rule: RuleKind, value: f64) -> Result<(), WeightError> {
        self.weights.set_weight(rule, value)?;
        log::debug!("weight updated: {rule} = {value}");
        Ok(())
    }

    /// Restores the default weight table.
    pub fn reset_weights(&mut self) {
        self.weights.reset();
        log::debug!("weight table reset to defaults");
    }

    /// Scores one candidate against a scene.
    ///
    /// All seven rule families run in fixed order with no short-circuiting,
    /// so a candidate can trigger several rules and their contributions
    /// stack (capped at 100). A candidate triggering nothing comes back
    /// with a zero score and the fixed no-matches narrative.
    #[must_use]
    pub fn evaluate<'a>(&self, scene: &CrimeScene, criminal: &'a Criminal) -> Suspect<'a> {
        let mut suspect = Suspect::new(criminal);

        self.score_crime_type(&mut suspect, scene, criminal);
        self.score_location(&mut suspect, scene, criminal);
        self.score_modus_operandi(&mut suspect, scene, criminal);
        self.score_evidence(&mut suspect, scene, criminal);
        self.score_prior_crimes(&mut suspect, scene, criminal);
        self.score_victim_profile(&mut suspect, scene, criminal);
        self.score_behavior(&mut suspect, criminal);

        if suspect.reasoning().is_empty() {
            suspect.set_reasoning("No significant matches found.");
        } else {
            let narrative = suspect.reasoning().trim_end().to_string();
            suspect.set_reasoning(narrative);
        }
        suspect
    }

    /// Scores every candidate against the scene and ranks them by
    /// descending probability score.
    ///
    /// The sort is stable: candidates with equal scores keep their input
    /// order. An empty candidate collection yields an empty ranking.
    #[must_use]
    pub fn analyze_crime_scene<'a, I>(&self, scene: &CrimeScene, criminals: I) -> Vec<Suspect<'a>>
    where
        I: IntoIterator<Item = &'a Criminal>,
    {
        let mut suspects: Vec<Suspect<'a>> = criminals
            .into_iter()
            .map(|criminal| self.evaluate(scene, criminal))
            .collect();
        suspects.sort_by(|a, b| b.probability_score().total_cmp(&a.probability_score()));
        log::info!(
            "Analyzed scene {}: {} candidates ranked",
            scene.id(),
            suspects.len()
        );
        suspects
    }

    /// The `n` highest-scoring suspects for the scene.
    #[must_use]
    pub fn top_suspects<'a, I>(
        &self,
        scene: &CrimeScene,
        criminals: I,
        n: usize,
    ) -> Vec<Suspect<'a>>
    where
        I: IntoIterator<Item = &'a Criminal>,
    {
        let mut ranked = self.analyze_crime_scene(scene, criminals);
        ranked.truncate(n);
        ranked
    }

    fn score_crime_type(
        &self,
        suspect: &mut Suspect<'_>,
        scene: &CrimeScene,
        criminal: &Criminal,
    ) {
        let crime_type = scene.crime_type().as_ref().to_lowercase();
        let kind = criminal.kind().as_ref().to_lowercase();
        // Names match by containment, so the sexual assault type also
        // reaches violent offenders through its embedded assault tag.
        let matched = CrimeType::all().iter().any(|candidate| {
            crime_type.contains(&candidate.as_ref().to_lowercase())
                && kind.contains(&expected_kind(*candidate).as_ref().to_lowercase())
        });
        if matched {
            suspect.record(
                RuleKind::CrimeTypeMatch,
                self.weights.weight(RuleKind::CrimeTypeMatch),
                "Crime type matches",
                "Crime type matches profile. ",
            );
        }
    }

    fn score_location(&self, suspect: &mut Suspect<'_>, scene: &CrimeScene, criminal: &Criminal) {
        if criminal.operates_in_location(scene.location()) {
            suspect.record(
                RuleKind::LocationProximity,
                self.weights.weight(RuleKind::LocationProximity),
                "Known to operate in area",
                "Operates in this location. ",
            );
        }
    }

    fn score_modus_operandi(
        &self,
        suspect: &mut Suspect<'_>,
        scene: &CrimeScene,
        criminal: &Criminal,
    ) {
        let Some(organization) = scene.characteristic("organization") else {
            return;
        };
        let mo = criminal.modus_operandi().to_lowercase();
        let triggered = if organization.eq_ignore_ascii_case("organized") {
            mo.contains("organized")
        } else if organization.eq_ignore_ascii_case("disorganized") {
            mo.contains("disorganized") || mo.contains("impulsive")
        } else {
            false
        };
        if triggered {
            suspect.record(
                RuleKind::MoSimilarity,
                self.weights.weight(RuleKind::MoSimilarity),
                "MO matches",
                "MO matches scene characteristics. ",
            );
        }
    }

    fn score_evidence(&self, suspect: &mut Suspect<'_>, scene: &CrimeScene, criminal: &Criminal) {
        for evidence in scene.evidence() {
            match evidence.kind() {
                EvidenceKind::Weapon => self.score_weapon(suspect, evidence, criminal),
                EvidenceKind::Digital => {
                    if criminal.kind() == CriminalKind::CyberCriminal {
                        suspect.record(
                            RuleKind::DigitalEvidence,
                            self.weights.weight(RuleKind::DigitalEvidence),
                            "Digital evidence present",
                            "Digital evidence links to cyber activity. ",
                        );
                    }
                }
                EvidenceKind::Surveillance => suspect.record(
                    RuleKind::SurveillanceFootage,
                    self.weights.weight(RuleKind::SurveillanceFootage) * SURVEILLANCE_MULTIPLIER,
                    "Surveillance available",
                    "Captured on nearby surveillance. ",
                ),
                EvidenceKind::Financial => {
                    if matches!(
                        criminal.kind(),
                        CriminalKind::Fraudster | CriminalKind::MoneyLaunderer
                    ) {
                        suspect.record(
                            RuleKind::FinancialRecords,
                            self.weights.weight(RuleKind::FinancialRecords),
                            "Financial records present",
                            "Financial evidence relevant. ",
                        );
                    }
                }
                EvidenceKind::Witness => suspect.record(
                    RuleKind::WitnessTestimony,
                    self.weights.weight(RuleKind::WitnessTestimony) * WITNESS_MULTIPLIER,
                    "Witness testimony",
                    "Witness account is consistent. ",
                ),
                EvidenceKind::Document
                | EvidenceKind::Fiber
                | EvidenceKind::Ballistic
                | EvidenceKind::Trace
                | EvidenceKind::Toxicology => {}
            }
        }
    }

    fn score_weapon(&self, suspect: &mut Suspect<'_>, evidence: &Evidence, criminal: &Criminal) {
        let Some(evidence_type) = evidence.attribute("type") else {
            return;
        };
        let Some(preference) = criminal.profile().weapon_preference() else {
            return;
        };
        if preference
            .to_lowercase()
            .contains(&evidence_type.to_lowercase())
        {
            let (factor, fragment) = if criminal.kind() == CriminalKind::Robber {
                ("Weapon type matches", "Weapon matches. ")
            } else {
                ("Weapon preference matches", "Weapon type matches preference. ")
            };
            suspect.record(
                RuleKind::WeaponMatch,
                self.weights.weight(RuleKind::WeaponMatch),
                factor,
                fragment,
            );
        }
    }

    fn score_prior_crimes(
        &self,
        suspect: &mut Suspect<'_>,
        scene: &CrimeScene,
        criminal: &Criminal,
    ) {
        if criminal.has_committed(scene.crime_type().as_ref()) {
            suspect.record(
                RuleKind::PriorCrimes,
                self.weights.weight(RuleKind::PriorCrimes),
                "History of similar crimes",
                "Has committed similar crimes. ",
            );
        }
    }

    fn score_victim_profile(
        &self,
        suspect: &mut Suspect<'_>,
        scene: &CrimeScene,
        criminal: &Criminal,
    ) {
        let Some(victim_profile) = scene.victim_profile() else {
            return;
        };
        if victim_profile.trim().is_empty() {
            return;
        }
        let Some(victim_type) = criminal.profile().victim_type() else {
            return;
        };
        if victim_profile
            .to_lowercase()
            .contains(&victim_type.to_lowercase())
        {
            suspect.record(
                RuleKind::VictimProfileMatch,
                self.weights.weight(RuleKind::VictimProfileMatch),
                "Victim profile matches",
                "Victim profile matches. ",
            );
        }
    }

    fn score_behavior(&self, suspect: &mut Suspect<'_>, criminal: &Criminal) {
        if criminal.danger_level() == DangerLevel::Extreme {
            suspect.record(
                RuleKind::DangerLevel,
                self.weights.weight(RuleKind::DangerLevel),
                "Extreme danger classification",
                "Known for extreme danger. ",
            );
        }
        let risk = criminal.risk_factor();
        if risk > RISK_THRESHOLD {
            suspect.record(
                RuleKind::RiskFactor,
                self.weights.weight(RuleKind::RiskFactor) * risk,
                "High risk factor",
                "High risk profile. ",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragnet_criminal_models::{Gender, KindProfile};
    use dragnet_engine_models::Confidence;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn lahore_killer() -> Criminal {
        let mut criminal = Criminal::with_profile(
            "CRIM00001",
            "Omar Siddiqui",
            36,
            Gender::Male,
            KindProfile::SerialKiller {
                signature: None,
                victim_count: 4,
                victim_type: Some("Young women".to_string()),
                organized: true,
                cooling_off_period: None,
            },
        );
        criminal.add_known_location("Lahore");
        criminal.add_prior_crime("Murder");
        criminal
    }

    fn murder_scene() -> CrimeScene {
        CrimeScene::new("SCENE0001", CrimeType::Murder, "Lahore").unwrap()
    }

    #[test]
    fn affinity_table_pairs_each_type_with_a_distinct_kind() {
        let mut kinds: Vec<CriminalKind> = CrimeType::all()
            .iter()
            .map(|crime_type| expected_kind(*crime_type))
            .collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), CrimeType::all().len());

        assert_eq!(expected_kind(CrimeType::Murder), CriminalKind::SerialKiller);
        assert_eq!(
            expected_kind(CrimeType::SexualAssault),
            CriminalKind::SexualOffender
        );
        assert_eq!(
            expected_kind(CrimeType::MoneyLaundering),
            CriminalKind::MoneyLaunderer
        );
    }

    #[test]
    fn every_crime_type_implicates_its_paired_kind() {
        let engine = RuleEngine::new();
        for crime_type in CrimeType::all() {
            let scene = CrimeScene::new("SCENE0010", *crime_type, "Karachi").unwrap();
            let criminal = Criminal::new(
                "CRIM00021",
                "A B",
                30,
                Gender::Other,
                expected_kind(*crime_type),
            );
            let suspect = engine.evaluate(&scene, &criminal);
            assert!(
                approx(suspect.rule_score(RuleKind::CrimeTypeMatch).unwrap(), 25.0),
                "no crime type match for {crime_type}"
            );
        }
    }

    #[test]
    fn sexual_assault_scenes_also_implicate_violent_offenders() {
        let engine = RuleEngine::new();
        let scene = CrimeScene::new("SCENE0011", CrimeType::SexualAssault, "Hyderabad").unwrap();

        let offender = Criminal::new(
            "CRIM00022",
            "B C",
            38,
            Gender::Male,
            CriminalKind::ViolentOffender,
        );
        let suspect = engine.evaluate(&scene, &offender);
        assert!(approx(
            suspect.rule_score(RuleKind::CrimeTypeMatch).unwrap(),
            25.0
        ));
        assert!(suspect.matching_factors().contains(&"Crime type matches"));

        let predator = Criminal::new(
            "CRIM00023",
            "D E",
            45,
            Gender::Male,
            CriminalKind::SexualOffender,
        );
        let suspect = engine.evaluate(&scene, &predator);
        assert!(approx(
            suspect.rule_score(RuleKind::CrimeTypeMatch).unwrap(),
            25.0
        ));

        // The embedded tag reaches in one direction only.
        let assault = CrimeScene::new("SCENE0012", CrimeType::Assault, "Hyderabad").unwrap();
        let suspect = engine.evaluate(&assault, &predator);
        assert_eq!(suspect.rule_score(RuleKind::CrimeTypeMatch), None);

        let thief = Criminal::new("CRIM00024", "F G", 27, Gender::Male, CriminalKind::Thief);
        let suspect = engine.evaluate(&scene, &thief);
        assert_eq!(suspect.rule_score(RuleKind::CrimeTypeMatch), None);
    }

    #[test]
    fn lahore_murder_scenario_ranks_high() {
        let engine = RuleEngine::new();
        let criminal = lahore_killer();
        let suspect = engine.evaluate(&murder_scene(), &criminal);

        assert!(suspect.rule_score(RuleKind::CrimeTypeMatch).is_some());
        assert!(suspect.rule_score(RuleKind::LocationProximity).is_some());
        assert!(suspect.rule_score(RuleKind::PriorCrimes).is_some());
        // 25 + 20 + 15 + 10 (extreme danger) + 8 * 0.95 (risk).
        assert!(approx(suspect.probability_score(), 77.6));
        assert!(suspect.confidence() >= Confidence::High);
        assert_eq!(
            suspect.reasoning(),
            "Crime type matches profile. Operates in this location. \
             Has committed similar crimes. Known for extreme danger. \
             High risk profile."
        );
    }

    #[test]
    fn unrelated_candidate_scores_zero() {
        let engine = RuleEngine::new();
        let criminal = Criminal::new("CRIM00002", "P Q", 25, Gender::Female, CriminalKind::Thief);
        let suspect = engine.evaluate(&murder_scene(), &criminal);

        assert!(approx(suspect.probability_score(), 0.0));
        assert_eq!(suspect.confidence(), Confidence::VeryLow);
        assert_eq!(suspect.reasoning(), "No significant matches found.");
        assert!(suspect.matching_factors().is_empty());
    }

    #[test]
    fn weapon_evidence_matches_declared_preference() {
        let engine = RuleEngine::new();
        let mut scene = CrimeScene::new("SCENE0002", CrimeType::Assault, "Multan").unwrap();
        let mut weapon = Evidence::new(
            "SCENE0002-E001",
            EvidenceKind::Weapon,
            "Folding knife recovered near the stall",
        )
        .unwrap();
        weapon.set_attribute("type", "knife").unwrap();
        scene.add_evidence(weapon).unwrap();

        let offender = Criminal::with_profile(
            "CRIM00003",
            "Imran Gul",
            31,
            Gender::Male,
            KindProfile::ViolentOffender {
                weapon_preference: Some("Knife and blunt objects".to_string()),
                impulse_control: false,
                substance_abuse: false,
                trigger_type: None,
                assault_count: 3,
            },
        );
        let suspect = engine.evaluate(&scene, &offender);
        assert!(approx(suspect.rule_score(RuleKind::WeaponMatch).unwrap(), 20.0));
        assert!(suspect
            .matching_factors()
            .contains(&"Weapon preference matches"));

        let robber = Criminal::with_profile(
            "CRIM00004",
            "B K",
            34,
            Gender::Male,
            KindProfile::Robber {
                target_type: None,
                weapon_type: Some("Knife".to_string()),
                works_in_group: false,
                robbery_count: 2,
                total_stolen: 0.0,
            },
        );
        let suspect = engine.evaluate(&scene, &robber);
        assert!(suspect.rule_score(RuleKind::WeaponMatch).is_some());
        assert!(suspect.matching_factors().contains(&"Weapon type matches"));

        let thief = Criminal::new("CRIM00005", "T M", 28, Gender::Male, CriminalKind::Thief);
        let suspect = engine.evaluate(&scene, &thief);
        assert_eq!(suspect.rule_score(RuleKind::WeaponMatch), None);
    }

    #[test]
    fn surveillance_and_witness_apply_to_everyone_scaled() {
        let engine = RuleEngine::new();
        let mut scene = CrimeScene::new("SCENE0003", CrimeType::Theft, "Quetta").unwrap();
        scene
            .add_evidence(
                Evidence::new("E1", EvidenceKind::Surveillance, "Bazaar CCTV recording").unwrap(),
            )
            .unwrap();
        scene
            .add_evidence(
                Evidence::new("E2", EvidenceKind::Witness, "Shopkeeper statement").unwrap(),
            )
            .unwrap();

        let criminal = Criminal::new("CRIM00006", "N O", 27, Gender::Other, CriminalKind::Arsonist);
        let suspect = engine.evaluate(&scene, &criminal);

        // 18 * 0.5 and 12 * 0.7.
        assert!(approx(
            suspect.rule_score(RuleKind::SurveillanceFootage).unwrap(),
            9.0
        ));
        assert!(approx(
            suspect.rule_score(RuleKind::WitnessTestimony).unwrap(),
            8.4
        ));
        // Arsonist risk sits exactly at the threshold, which is exclusive.
        assert_eq!(suspect.rule_score(RuleKind::RiskFactor), None);
        assert!(approx(suspect.probability_score(), 17.4));
    }

    #[test]
    fn repeated_surveillance_does_not_stack() {
        let engine = RuleEngine::new();
        let mut scene = murder_scene();
        scene
            .add_evidence(
                Evidence::new("E1", EvidenceKind::Surveillance, "North gate camera").unwrap(),
            )
            .unwrap();
        scene
            .add_evidence(
                Evidence::new("E2", EvidenceKind::Surveillance, "South gate camera").unwrap(),
            )
            .unwrap();

        let criminal = Criminal::new("CRIM00007", "S T", 30, Gender::Male, CriminalKind::Thief);
        let suspect = engine.evaluate(&scene, &criminal);

        assert!(approx(
            suspect.rule_score(RuleKind::SurveillanceFootage).unwrap(),
            9.0
        ));
        assert_eq!(suspect.matching_factors(), ["Surveillance available"]);
        assert!(approx(suspect.probability_score(), 9.0));
    }

    #[test]
    fn digital_evidence_links_cyber_criminals_only() {
        let engine = RuleEngine::new();
        let mut scene = CrimeScene::new("SCENE0005", CrimeType::CyberCrime, "Islamabad").unwrap();
        scene
            .add_evidence(
                Evidence::new("E1", EvidenceKind::Digital, "Compromised workstation image")
                    .unwrap(),
            )
            .unwrap();

        let hacker = Criminal::new(
            "CRIM00008",
            "W X",
            24,
            Gender::Female,
            CriminalKind::CyberCriminal,
        );
        let suspect = engine.evaluate(&scene, &hacker);
        assert!(approx(
            suspect.rule_score(RuleKind::DigitalEvidence).unwrap(),
            15.0
        ));

        let fraudster =
            Criminal::new("CRIM00009", "Y Z", 40, Gender::Male, CriminalKind::Fraudster);
        let suspect = engine.evaluate(&scene, &fraudster);
        assert_eq!(suspect.rule_score(RuleKind::DigitalEvidence), None);
    }

    #[test]
    fn financial_records_gate_on_financial_kinds() {
        let engine = RuleEngine::new();
        let mut scene = CrimeScene::new("SCENE0006", CrimeType::Fraud, "Faisalabad").unwrap();
        scene
            .add_evidence(
                Evidence::new("E1", EvidenceKind::Financial, "Shell company ledgers").unwrap(),
            )
            .unwrap();

        let fraudster =
            Criminal::new("CRIM00010", "Z Q", 41, Gender::Female, CriminalKind::Fraudster);
        let suspect = engine.evaluate(&scene, &fraudster);
        assert!(approx(
            suspect.rule_score(RuleKind::FinancialRecords).unwrap(),
            15.0
        ));

        let launderer = Criminal::new(
            "CRIM00011",
            "L M",
            48,
            Gender::Male,
            CriminalKind::MoneyLaunderer,
        );
        let suspect = engine.evaluate(&scene, &launderer);
        assert!(suspect.rule_score(RuleKind::FinancialRecords).is_some());

        let thief = Criminal::new("CRIM00012", "T U", 26, Gender::Male, CriminalKind::Thief);
        let suspect = engine.evaluate(&scene, &thief);
        assert_eq!(suspect.rule_score(RuleKind::FinancialRecords), None);
    }

    #[test]
    fn mo_rule_reads_the_organization_characteristic() {
        let engine = RuleEngine::new();
        let mut disorganized = CrimeScene::new("SCENE0007", CrimeType::Assault, "Sialkot").unwrap();
        disorganized
            .set_characteristic("organization", "disorganized")
            .unwrap();

        let mut offender = Criminal::new(
            "CRIM00013",
            "H J",
            29,
            Gender::Male,
            CriminalKind::ViolentOffender,
        );
        offender.set_modus_operandi("Impulsive attacks in public places");
        let suspect = engine.evaluate(&disorganized, &offender);
        assert!(suspect.rule_score(RuleKind::MoSimilarity).is_some());

        // The boss's default MO mentions an organized enterprise.
        let mut organized = CrimeScene::new("SCENE0008", CrimeType::Assault, "Sialkot").unwrap();
        organized.set_characteristic("organization", "organized").unwrap();
        let boss = Criminal::new(
            "CRIM00014",
            "G F",
            55,
            Gender::Male,
            CriminalKind::OrganizedCrimeBoss,
        );
        let suspect = engine.evaluate(&organized, &boss);
        assert!(suspect.rule_score(RuleKind::MoSimilarity).is_some());

        // Absent characteristic: the rule does not apply.
        let bare = CrimeScene::new("SCENE0009", CrimeType::Assault, "Sialkot").unwrap();
        let suspect = engine.evaluate(&bare, &offender);
        assert_eq!(suspect.rule_score(RuleKind::MoSimilarity), None);
    }

    #[test]
    fn victim_profile_rule_is_serial_killer_only() {
        let engine = RuleEngine::new();
        let mut scene = murder_scene();
        scene.set_victim_profile("Young women in their twenties, last seen near the canal");

        let killer = lahore_killer();
        let suspect = engine.evaluate(&scene, &killer);
        assert!(suspect.rule_score(RuleKind::VictimProfileMatch).is_some());

        let kidnapper = Criminal::with_profile(
            "CRIM00015",
            "K L",
            44,
            Gender::Male,
            KindProfile::Kidnapper {
                motivation: None,
                demands_ransom: true,
                victim_count: 2,
                target_demographic: Some("Young women".to_string()),
                total_ransom: 0.0,
            },
        );
        let suspect = engine.evaluate(&scene, &kidnapper);
        assert_eq!(suspect.rule_score(RuleKind::VictimProfileMatch), None);
    }

    #[test]
    fn risk_rule_needs_strictly_more_than_threshold() {
        let engine = RuleEngine::new();
        let scene = murder_scene();

        let mut criminal = Criminal::new("CRIM00016", "R S", 33, Gender::Male, CriminalKind::Thief);
        criminal.set_risk_factor(0.7);
        let suspect = engine.evaluate(&scene, &criminal);
        assert_eq!(suspect.rule_score(RuleKind::RiskFactor), None);

        criminal.set_risk_factor(0.71);
        let suspect = engine.evaluate(&scene, &criminal);
        assert!(approx(
            suspect.rule_score(RuleKind::RiskFactor).unwrap(),
            8.0 * 0.71
        ));
    }

    #[test]
    fn scores_cap_at_one_hundred() {
        let mut weights = WeightTable::default();
        for rule in RuleKind::all() {
            weights.set_weight(*rule, 50.0).unwrap();
        }
        let engine = RuleEngine::with_weights(weights);

        let mut scene = murder_scene();
        scene.set_victim_profile("Young women last seen near the canal");
        scene.set_characteristic("organization", "organized").unwrap();
        scene
            .add_evidence(
                Evidence::new("E1", EvidenceKind::Surveillance, "Street camera recording")
                    .unwrap(),
            )
            .unwrap();

        let mut killer = lahore_killer();
        killer.set_modus_operandi("Highly organized killings");
        let suspect = engine.evaluate(&scene, &killer);

        assert!(approx(suspect.probability_score(), 100.0));
        assert_eq!(suspect.confidence(), Confidence::VeryHigh);
        // Per-rule contributions stay uncapped for the breakdown.
        assert!(approx(suspect.rule_score(RuleKind::CrimeTypeMatch).unwrap(), 50.0));
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let engine = RuleEngine::new();
        let scene = murder_scene();

        let first_thief =
            Criminal::new("CRIM00017", "First Entered", 22, Gender::Male, CriminalKind::Thief);
        let killer = lahore_killer();
        let second_thief =
            Criminal::new("CRIM00018", "Second Entered", 23, Gender::Male, CriminalKind::Thief);
        let criminals = vec![first_thief, killer, second_thief];

        let ranked = engine.analyze_crime_scene(&scene, &criminals);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].criminal().id(), "CRIM00001");
        // The two zero-score thieves keep their input order.
        assert_eq!(ranked[1].criminal().id(), "CRIM00017");
        assert_eq!(ranked[2].criminal().id(), "CRIM00018");
        for pair in ranked.windows(2) {
            assert!(pair[0].probability_score() >= pair[1].probability_score());
        }
    }

    #[test]
    fn top_suspects_truncates_the_ranking() {
        let engine = RuleEngine::new();
        let scene = murder_scene();
        let criminals = vec![
            lahore_killer(),
            Criminal::new("CRIM00019", "A B", 30, Gender::Male, CriminalKind::Thief),
            Criminal::new("CRIM00020", "C D", 35, Gender::Female, CriminalKind::Arsonist),
        ];

        let top = engine.top_suspects(&scene, &criminals, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].criminal().id(), "CRIM00001");

        let all = engine.top_suspects(&scene, &criminals, 10);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn empty_candidate_list_yields_empty_ranking() {
        let engine = RuleEngine::new();
        let none: Vec<Criminal> = Vec::new();
        let ranked = engine.analyze_crime_scene(&murder_scene(), &none);
        assert!(ranked.is_empty());
    }

    #[test]
    fn analysis_is_idempotent() {
        let engine = RuleEngine::new();
        let scene = murder_scene();
        let criminals = vec![lahore_killer()];

        let first = engine.analyze_crime_scene(&scene, &criminals);
        let second = engine.analyze_crime_scene(&scene, &criminals);

        assert_eq!(first.len(), second.len());
        assert!(approx(
            first[0].probability_score(),
            second[0].probability_score()
        ));
        assert_eq!(first[0].reasoning(), second[0].reasoning());
        assert_eq!(first[0].matching_factors(), second[0].matching_factors());
    }
}
