//! Entropy section - estimates bits from the alphabet the password likely drew from.

use super::{PasswordProfile, SectionResult};

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SYMBOL_POOL: u32 = 32;

const MAX_POINTS: f64 = 10.0;

/// Estimated alphabet size: per-class constants summed over present classes.
fn pool_size(profile: &PasswordProfile) -> u32 {
    [
        (profile.has_lowercase, LOWERCASE_POOL),
        (profile.has_uppercase, UPPERCASE_POOL),
        (profile.has_digit, DIGIT_POOL),
        (profile.has_symbol, SYMBOL_POOL),
    ]
    .into_iter()
    .filter(|(present, _)| *present)
    .map(|(_, size)| size)
    .sum()
}

/// `length * log2(pool)` bits.
fn estimated_entropy(profile: &PasswordProfile) -> f64 {
    let pool = pool_size(profile);
    if pool == 0 {
        return 0.0;
    }
    profile.length as f64 * f64::from(pool).log2()
}

/// `min(entropy / 10, 10)`. Never contributes feedback.
pub fn entropy_section(profile: &PasswordProfile) -> SectionResult {
    let mut result = SectionResult::default();
    result.add((estimated_entropy(profile) / 10.0).min(MAX_POINTS));
    result
}
