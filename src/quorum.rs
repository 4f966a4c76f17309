/// Approvals needed, as a fraction of all contributors: 3/4 = 75%
pub const QUORUM_NUMERATOR: u64 = 3;
pub const QUORUM_DENOMINATOR: u64 = 4;

/// `votes / contributors >= 3/4`, cross-multiplied so no division or rounding
/// is involved. Widened to u128 so neither side can overflow.
///
/// With zero contributors the threshold is zero and any vote count passes.
pub fn quorum_reached(votes: u64, contributors: u64) -> bool {
    (votes as u128) * (QUORUM_DENOMINATOR as u128)
        >= (contributors as u128) * (QUORUM_NUMERATOR as u128)
}

/// Smallest vote count that reaches quorum for the given number of contributors.
pub fn votes_needed(contributors: u64) -> u64 {
    let threshold = (contributors as u128) * (QUORUM_NUMERATOR as u128);
    let denominator = QUORUM_DENOMINATOR as u128;
    ((threshold + denominator - 1) / denominator) as u64
}
