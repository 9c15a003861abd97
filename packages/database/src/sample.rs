//! Bundled demonstration dataset.
//!
//! Eight criminals across the kind spectrum and three evidence-bearing
//! crime scenes, used by demos and integration-style tests. Every id is
//! drawn from a fresh [`IdGenerator`], and the generator is handed to the
//! registry afterwards, so later registrations continue numbering where
//! the bundle left off.

use dragnet_case_models::{CaseError, CrimeScene, CrimeType, Evidence, EvidenceKind};
use dragnet_criminal_models::{Criminal, Gender, KindProfile};

use crate::ids::IdGenerator;
use crate::{CriminalDatabase, DatabaseError};

/// Loads the bundled dataset into an empty registry.
///
/// # Errors
///
/// Returns [`DatabaseError`] if the registry already contains a record
/// under one of the bundled ids.
pub fn load_sample_data(db: &mut CriminalDatabase) -> Result<(), DatabaseError> {
    let mut ids = IdGenerator::new();

    for criminal in sample_criminals(&mut ids) {
        db.add_criminal(criminal)?;
    }
    for scene in sample_scenes(&mut ids)? {
        db.add_scene(scene)?;
    }
    *db.ids_mut() = ids;

    log::info!(
        "Sample data loaded: {} criminals, {} crime scenes",
        db.criminal_count(),
        db.scene_count()
    );
    Ok(())
}

fn sample_criminals(ids: &mut IdGenerator) -> Vec<Criminal> {
    vec![
        killer(ids),
        thief(ids),
        offender(ids),
        fraudster(ids),
        arsonist(ids),
        trafficker(ids),
        hacker(ids),
        robber(ids),
    ]
}

fn sample_scenes(ids: &mut IdGenerator) -> Result<Vec<CrimeScene>, DatabaseError> {
    Ok(vec![
        murder_scene(ids)?,
        theft_scene(ids)?,
        assault_scene(ids)?,
    ])
}

fn killer(ids: &mut IdGenerator) -> Criminal {
    let mut killer = Criminal::with_profile(
        ids.next_criminal_id(),
        "Kashif",
        35,
        Gender::Male,
        KindProfile::SerialKiller {
            signature: Some("Leaves a red rose at each scene".to_string()),
            victim_count: 7,
            victim_type: Some("Young women, 20-30 years old".to_string()),
            organized: true,
            cooling_off_period: None,
        },
    );
    killer.set_psychological_profile("Organized, high IQ, narcissistic personality");
    killer.add_known_location("Lahore");
    killer.add_known_location("University District");
    killer.add_prior_crime("Murder");
    killer.add_prior_crime("Assault");
    killer
}

fn thief(ids: &mut IdGenerator) -> Criminal {
    let mut thief = Criminal::with_profile(
        ids.next_criminal_id(),
        "Ali",
        28,
        Gender::Male,
        KindProfile::Thief {
            specialization: Some("burglary".to_string()),
            total_stolen_value: 75_000.0,
            preferred_target: Some("Residential homes".to_string()),
            works_solo: true,
        },
    );
    thief.set_psychological_profile("Risk-taker, opportunistic, street-smart");
    thief.add_known_location("Shadrah");
    thief.add_known_location("Lahore");
    thief.add_prior_crime("Theft");
    thief.add_prior_crime("Breaking and Entering");
    thief
}

fn offender(ids: &mut IdGenerator) -> Criminal {
    let mut offender = Criminal::with_profile(
        ids.next_criminal_id(),
        "Rizwan",
        31,
        Gender::Male,
        KindProfile::ViolentOffender {
            weapon_preference: Some("knife".to_string()),
            impulse_control: false,
            substance_abuse: true,
            trigger_type: Some("anger and perceived disrespect".to_string()),
            assault_count: 0,
        },
    );
    offender.set_psychological_profile("Anger issues, explosive temperament, substance abuse");
    offender.add_known_location("Lahore");
    offender.add_known_location("Industrial Area");
    offender.add_prior_crime("Assault");
    offender.add_prior_crime("Battery");
    offender
}

fn fraudster(ids: &mut IdGenerator) -> Criminal {
    let mut fraudster = Criminal::with_profile(
        ids.next_criminal_id(),
        "Ronaldo",
        42,
        Gender::Male,
        KindProfile::Fraudster {
            fraud_type: Some("financial fraud".to_string()),
            total_defrauded_amount: 350_000.0,
            method_of_contact: Some("phone and email".to_string()),
            uses_online_tools: true,
            victim_count: 0,
        },
    );
    fraudster.set_psychological_profile("Manipulative, charming, highly intelligent");
    fraudster.add_known_location("Business District");
    fraudster.add_prior_crime("Fraud");
    fraudster.add_prior_crime("Identity Theft");
    fraudster
}

fn arsonist(ids: &mut IdGenerator) -> Criminal {
    let mut arsonist = Criminal::with_profile(
        ids.next_criminal_id(),
        "Aliya",
        29,
        Gender::Female,
        KindProfile::Arsonist {
            accelerant_type: Some("gasoline".to_string()),
            target_type: Some("commercial".to_string()),
            motivation: Some("excitement".to_string()),
            fire_count: 3,
            firefighting_knowledge: false,
        },
    );
    arsonist.set_psychological_profile("Pyromania, thrill-seeking, antisocial");
    arsonist.add_known_location("Industrial Area");
    arsonist.add_prior_crime("Arson");
    arsonist
}

fn trafficker(ids: &mut IdGenerator) -> Criminal {
    let mut trafficker = Criminal::with_profile(
        ids.next_criminal_id(),
        "Ayesha",
        38,
        Gender::Female,
        KindProfile::DrugTrafficker {
            primary_drug: Some("cocaine".to_string()),
            operation_scale: "REGIONAL".to_string(),
            cartel_connections: true,
            uses_violence: true,
            total_street_value: 500_000.0,
        },
    );
    trafficker.set_psychological_profile("Ruthless, business-minded, violent when necessary");
    trafficker.add_known_location("Port Area");
    trafficker.add_known_location("Highway 95");
    trafficker.add_prior_crime("DrugTrafficking");
    trafficker
}

fn hacker(ids: &mut IdGenerator) -> Criminal {
    let mut hacker = Criminal::with_profile(
        ids.next_criminal_id(),
        "Alex",
        25,
        Gender::Male,
        KindProfile::CyberCriminal {
            specialization: Some("hacking".to_string()),
            skill_level: "EXPERT".to_string(),
            part_of_group: true,
            preferred_target: Some("corporate".to_string()),
            systems_compromised: 2,
            financial_damage: 250_000.0,
        },
    );
    hacker.set_psychological_profile(
        "Highly intelligent, socially awkward, ideologically motivated",
    );
    hacker.add_known_location("Online");
    hacker.add_prior_crime("CyberCrime");
    hacker
}

fn robber(ids: &mut IdGenerator) -> Criminal {
    let mut robber = Criminal::with_profile(
        ids.next_criminal_id(),
        "Tommy",
        33,
        Gender::Male,
        KindProfile::Robber {
            target_type: Some("store".to_string()),
            weapon_type: Some("gun".to_string()),
            works_in_group: false,
            robbery_count: 2,
            total_stolen: 15_000.0,
        },
    );
    robber.set_psychological_profile("Aggressive, impulsive, desperate for money");
    robber.add_known_location("Commercial District");
    robber.add_prior_crime("Robbery");
    robber
}

fn murder_scene(ids: &mut IdGenerator) -> Result<CrimeScene, CaseError> {
    let scene_id = ids.next_scene_id();
    let mut scene = CrimeScene::new(scene_id.clone(), CrimeType::Murder, "Downtown Park")?;
    scene.set_description("Victim found in secluded area of park, organized crime scene");
    scene.set_characteristic("organization", "organized")?;
    scene.set_characteristic("time", "night")?;
    scene.set_victim_profile("Female, age 25, professional");

    let mut rose = Evidence::new(
        ids.next_evidence_id(&scene_id),
        EvidenceKind::Document,
        "Red rose left at scene",
    )?;
    rose.set_location("Downtown Park");
    rose.set_attribute("signature", "red rose")?;
    scene.add_evidence(rose)?;

    scene.secure("Detective Sarah Johnson")?;
    Ok(scene)
}

fn theft_scene(ids: &mut IdGenerator) -> Result<CrimeScene, CaseError> {
    let scene_id = ids.next_scene_id();
    let mut scene = CrimeScene::new(scene_id.clone(), CrimeType::Theft, "Industrial area")?;
    scene.set_description("Residential burglary, entry through back window");
    scene.set_characteristic("entry_method", "back window")?;
    scene.set_characteristic("time", "day")?;

    let mut marks = Evidence::new(
        ids.next_evidence_id(&scene_id),
        EvidenceKind::Trace,
        "Pry marks on window",
    )?;
    marks.set_location("Lahore");
    scene.add_evidence(marks)?;

    Ok(scene)
}

fn assault_scene(ids: &mut IdGenerator) -> Result<CrimeScene, CaseError> {
    let scene_id = ids.next_scene_id();
    let mut scene = CrimeScene::new(
        scene_id.clone(),
        CrimeType::Assault,
        "Bar District - Murphy's Pub",
    )?;
    scene.set_description("Violent altercation outside bar, victim stabbed");
    scene.set_characteristic("weapon", "knife")?;
    scene.set_characteristic("time", "late night")?;

    let mut knife = Evidence::new(
        ids.next_evidence_id(&scene_id),
        EvidenceKind::Weapon,
        "Knife recovered from scene",
    )?;
    knife.set_location("Murphy's Pub");
    knife.set_attribute("type", "knife")?;
    scene.add_evidence(knife)?;

    let mut witness = Evidence::new(
        ids.next_evidence_id(&scene_id),
        EvidenceKind::Witness,
        "Bar patron witnessed fight",
    )?;
    witness.set_location("Murphy's Pub");
    witness.set_attribute("description", "Male, 30s, aggressive behavior")?;
    scene.add_evidence(witness)?;

    Ok(scene)
}
