//! Field validation for registry inputs.
//!
//! These checks run at the registration boundary. Fully constructed
//! records can still be inserted directly, which keeps snapshot restores
//! and fixtures out of the validators' way.

use std::sync::LazyLock;

use regex::Regex;

/// Matches names built from letters, whitespace, hyphens, and apostrophes.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s'-]+$").expect("valid regex"));

/// Matches canonical criminal ids like `CRIM00042`.
static CRIMINAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CRIM\d{5}$").expect("valid regex"));

/// Matches canonical scene ids like `SCENE0007`.
static SCENE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SCENE\d{4}$").expect("valid regex"));

/// Whether a person name is acceptable: 2 to 50 characters drawn from
/// letters, whitespace, hyphens, and apostrophes, and not blank.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && (2..=50).contains(&name.len()) && NAME_RE.is_match(name)
}

/// Whether an age falls in the accepted 10 to 120 range.
#[must_use]
pub fn is_valid_age(age: u32) -> bool {
    (10..=120).contains(&age)
}

/// Whether a location string is acceptable: 3 to 100 characters, not
/// blank.
#[must_use]
pub fn is_valid_location(location: &str) -> bool {
    !location.trim().is_empty() && (3..=100).contains(&location.len())
}

/// Whether a free-text description is acceptable: 10 to 1000 characters,
/// not blank.
#[must_use]
pub fn is_valid_description(description: &str) -> bool {
    !description.trim().is_empty() && (10..=1000).contains(&description.len())
}

/// Whether an id follows the canonical criminal format.
#[must_use]
pub fn is_valid_criminal_id(id: &str) -> bool {
    CRIMINAL_ID_RE.is_match(id)
}

/// Whether an id follows the canonical scene format.
#[must_use]
pub fn is_valid_scene_id(id: &str) -> bool {
    SCENE_ID_RE.is_match(id)
}

/// Whether an id follows either canonical record format.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    is_valid_criminal_id(id) || is_valid_scene_id(id)
}
