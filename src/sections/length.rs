//! Length section - rewards length at fixed thresholds.

use super::{PasswordProfile, SectionResult};

const LENGTH_THRESHOLDS: [usize; 4] = [8, 12, 16, 20];
const POINTS_PER_THRESHOLD: f64 = 10.0;

pub const MIN_LENGTH: usize = 8;
pub const RECOMMENDED_LENGTH: usize = 12;

pub const SHORT_FEEDBACK: &str = "Use at least 8 characters";
pub const BELOW_RECOMMENDED_FEEDBACK: &str = "Use 12 or more characters for better security";

/// +10 for each threshold reached (8, 12, 16, 20).
pub fn length_section(profile: &PasswordProfile) -> SectionResult {
    let mut result = SectionResult::default();

    for threshold in LENGTH_THRESHOLDS {
        if profile.length >= threshold {
            result.add(POINTS_PER_THRESHOLD);
        }
    }

    result.suggest_if(profile.length < MIN_LENGTH, SHORT_FEEDBACK);
    result.suggest_if(profile.length < RECOMMENDED_LENGTH, BELOW_RECOMMENDED_FEEDBACK);
    result
}
