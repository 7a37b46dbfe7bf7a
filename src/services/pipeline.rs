use crate::domain::models::RankingEntry;
use crate::error::BoardError;
use crate::services::aggregator::{aggregate, RankingConfig};
use crate::services::ranker::rank;
use crate::services::registry::AttestationSource;
use tracing::info;

/// One full leaderboard run: fetch, aggregate, rank.
///
/// Every run starts from an empty map, so concurrent callers never share
/// intermediate state. Any error aborts the run without a partial ranking.
pub fn compute_leaderboard(
    source: &dyn AttestationSource,
    cfg: &RankingConfig,
) -> Result<Vec<RankingEntry>, BoardError> {
    let records = source.fetch()?;
    let sets = aggregate(&records, cfg)?;
    let ranking = rank(sets);
    info!(wallets = ranking.len(), issuer = %cfg.issuer, "computed leaderboard");
    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AttestationRecord;
    use serde_json::json;

    const ISSUER: &str = "0xd5064bd244138fa4ff1b9048d165491889af5c15";

    struct Fixed(Vec<AttestationRecord>);

    impl AttestationSource for Fixed {
        fn fetch(&self) -> Result<Vec<AttestationRecord>, BoardError> {
            Ok(self.0.clone())
        }
    }

    struct Down;

    impl AttestationSource for Down {
        fn fetch(&self) -> Result<Vec<AttestationRecord>, BoardError> {
            Err(BoardError::Fetch("connection refused".to_string()))
        }
    }

    fn offering(attester: &str, recipient: &str, value: &str) -> AttestationRecord {
        AttestationRecord {
            attester: attester.to_string(),
            recipient: recipient.to_string(),
            payload: json!([{
                "name": "offering",
                "type": "string",
                "signature": "string offering",
                "value": {"name": "offering", "type": "string", "value": value}
            }])
            .to_string(),
        }
    }

    #[test]
    fn issuer_only_round_trip() {
        let source = Fixed(vec![
            offering(ISSUER, "0xAAA", "X"),
            offering(ISSUER, "0xAAA", "Y"),
            offering("0xOTHER", "0xBBB", "Z"),
        ]);
        let out = compute_leaderboard(&source, &RankingConfig::default()).unwrap();
        assert_eq!(
            out,
            vec![RankingEntry {
                rank: 1,
                wallet: "0xAAA".to_string(),
                unique_count: 2,
            }]
        );
    }

    #[test]
    fn counts_five_three_three_one() {
        let mut records = Vec::new();
        for v in ["a", "b", "c", "d", "e"] {
            records.push(offering(ISSUER, "0xFIVE", v));
        }
        for v in ["a", "b", "c"] {
            records.push(offering(ISSUER, "0xTHREE_B", v));
        }
        records.push(offering(ISSUER, "0xONE", "a"));
        for v in ["a", "b", "c", "a"] {
            records.push(offering(ISSUER, "0xTHREE_A", v));
        }

        let out = compute_leaderboard(&Fixed(records), &RankingConfig::default()).unwrap();
        let rows: Vec<_> = out
            .iter()
            .map(|e| (e.rank, e.wallet.as_str(), e.unique_count))
            .collect();
        assert_eq!(
            rows,
            vec![
                (1, "0xFIVE", 5),
                (2, "0xTHREE_B", 3),
                (3, "0xTHREE_A", 3),
                (4, "0xONE", 1),
            ]
        );
    }

    #[test]
    fn empty_inputs_give_empty_rankings() {
        let cfg = RankingConfig::default();
        assert!(compute_leaderboard(&Fixed(vec![]), &cfg).unwrap().is_empty());
        let others = Fixed(vec![offering("0xOTHER", "0xBBB", "Z")]);
        assert!(compute_leaderboard(&others, &cfg).unwrap().is_empty());
    }

    #[test]
    fn malformed_issuer_payload_fails_the_run() {
        let mut bad = offering(ISSUER, "0xBBB", "X");
        bad.payload = "{not json".to_string();
        let source = Fixed(vec![offering(ISSUER, "0xAAA", "X"), bad]);
        let err = compute_leaderboard(&source, &RankingConfig::default()).unwrap_err();
        assert!(matches!(err, BoardError::Decode { index: 1, .. }));
    }

    #[test]
    fn fetch_errors_propagate() {
        let err = compute_leaderboard(&Down, &RankingConfig::default()).unwrap_err();
        assert!(matches!(err, BoardError::Fetch(_)));
    }
}
