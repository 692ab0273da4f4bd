use super::WeightedTerm;

/// Order matches by descending weight and keep only their text.
///
/// The sort is stable: equal weights keep their input order. Store
/// completions arrive in ascending code-point order, so ties end up
/// alphabetical.
pub fn rank(matches: Vec<WeightedTerm>) -> Vec<String> {
    rank_top(matches, usize::MAX)
}

/// Like [`rank`], but returns at most `limit` strings.
pub fn rank_top(mut matches: Vec<WeightedTerm>, limit: usize) -> Vec<String> {
    matches.sort_by(|a, b| b.weight.cmp(&a.weight));
    matches.into_iter().take(limit).map(|m| m.term).collect()
}
