use crate::types::results::RankedScore;

pub const PODIUM_SIZE: usize = 3;

/// Full ordered list: descending by score, ties broken by entrant name
/// ascending. The same policy applies to the overall ranking and to every
/// subcategory ranking. Returns a new vector; the input stays untouched.
pub fn rank(scores: &[RankedScore]) -> Vec<RankedScore> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.entrant_name.cmp(&b.entrant_name))
    });
    ranked
}

/// Top 3 under the `rank` ordering; fewer than 3 entrants come back ranked
/// without error.
pub fn podium(scores: &[RankedScore]) -> Vec<RankedScore> {
    let mut ranked = rank(scores);
    ranked.truncate(PODIUM_SIZE);
    ranked
}
