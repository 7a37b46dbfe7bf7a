use crate::domain::models::RankingEntry;
use crate::services::aggregator::OfferingSets;

/// Orders wallets by distinct offering count, highest first.
///
/// Ties keep first-seen order (the sort is stable) and still get their own
/// consecutive rank numbers.
pub fn rank(sets: OfferingSets) -> Vec<RankingEntry> {
    let mut counts: Vec<(String, usize)> = sets
        .into_iter()
        .map(|(wallet, offerings)| (wallet, offerings.len()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .enumerate()
        .map(|(i, (wallet, unique_count))| RankingEntry {
            rank: i + 1,
            wallet,
            unique_count,
        })
        .collect()
}
