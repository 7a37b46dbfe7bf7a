use crate::domain::constants::{DEFAULT_ISSUER, OFFERING_FIELD};
use crate::domain::models::{AttestationRecord, FieldValue};
use crate::error::BoardError;
use crate::services::decoder::decode_payload;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

/// Recipient -> distinct offering values, in first-seen recipient order.
pub type OfferingSets = IndexMap<String, HashSet<FieldValue>>;

/// Which attestations count and which field is collected from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    pub issuer: String,
    pub field: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.to_string(),
            field: OFFERING_FIELD.to_string(),
        }
    }
}

impl RankingConfig {
    pub fn is_issuer(&self, attester: &str) -> bool {
        attester.eq_ignore_ascii_case(&self.issuer)
    }
}

/// Collects the distinct offering values attested by the configured issuer,
/// keyed by recipient exactly as the registry spells it.
///
/// Records from other attesters are skipped before their payload is looked
/// at. The first payload from the issuer that fails to decode aborts the
/// whole pass.
pub fn aggregate(
    records: &[AttestationRecord],
    cfg: &RankingConfig,
) -> Result<OfferingSets, BoardError> {
    let mut sets = OfferingSets::new();
    let mut skipped = 0usize;

    for (index, record) in records.iter().enumerate() {
        if !cfg.is_issuer(&record.attester) {
            skipped += 1;
            continue;
        }

        let fields = decode_payload(&record.payload).map_err(|e| BoardError::decode(index, e))?;
        for f in fields.into_iter().filter(|f| f.name == cfg.field) {
            sets.entry(record.recipient.clone())
                .or_default()
                .insert(f.value);
        }
    }

    debug!(
        records = records.len(),
        skipped,
        recipients = sets.len(),
        "aggregated offerings"
    );
    Ok(sets)
}
