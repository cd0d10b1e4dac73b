//! Ordering a batch of match results

use crate::processing::match_engine::MatchResult;

/// Sort results by descending match score. The sort is stable, so listings
/// with equal scores keep their original catalog order.
pub fn rank_matches(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    results
}
