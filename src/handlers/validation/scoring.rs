use super::classify::Classification;

const SYNTAX_POINTS: i32 = 30;
const MX_POINTS: i32 = 40;
const BUSINESS_POINTS: i32 = 30;
const FREE_POINTS: i32 = 20;
const DISPOSABLE_PENALTY: i32 = -20;

pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;

/// Computes the 0-100 quality score of an address.
///
/// Points are additive: valid syntax +30, at least one MX record +40, and
/// +30/+20/-20 for business/free/disposable. The sum is clamped into
/// `[MIN_SCORE, MAX_SCORE]`.
pub fn quality_score(
    syntax_valid: bool,
    mx_records: &[String],
    classification: Classification,
) -> u8 {
    let mut score = 0;

    if syntax_valid {
        score += SYNTAX_POINTS;
    }
    if !mx_records.is_empty() {
        score += MX_POINTS;
    }
    score += match classification {
        Classification::Business => BUSINESS_POINTS,
        Classification::Free => FREE_POINTS,
        Classification::Disposable => DISPOSABLE_PENALTY,
        Classification::Invalid => 0,
    };

    // Bounded by the clamp, the cast cannot truncate.
    score.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8
}

/// An address is deliverable when its syntax is valid, its domain has MX
/// records and it is not on a disposable domain.
pub fn is_deliverable(syntax_valid: bool, has_mx: bool, classification: Classification) -> bool {
    syntax_valid && has_mx && classification != Classification::Disposable
}
