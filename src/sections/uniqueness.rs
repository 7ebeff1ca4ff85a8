//! Uniqueness section - rewards a high ratio of distinct characters.

use super::{PasswordProfile, SectionResult};

const MAX_POINTS: f64 = 20.0;
const LOW_RATIO: f64 = 0.5;

pub const REPETITIVE_FEEDBACK: &str = "Avoid repeating the same characters";

/// `min(distinct / length * 20, 20)`.
pub fn uniqueness_section(profile: &PasswordProfile) -> SectionResult {
    let mut result = SectionResult::default();
    let ratio = profile.unique_ratio();

    result.add((ratio * MAX_POINTS).min(MAX_POINTS));
    result.suggest_if(ratio < LOW_RATIO, REPETITIVE_FEEDBACK);
    result
}
