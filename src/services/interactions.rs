use crate::dataset::{normalize, InteractionStore};
use crate::domain::models::{pair_key, InteractionRecord, InteractionReport, PairSeparator};

/// Candidate keys for a pair, in lookup order: both orderings with `|`,
/// then both orderings with `||`.
pub fn candidate_keys(a: &str, b: &str) -> [String; 4] {
    let (a, b) = (normalize(a), normalize(b));
    let [single, double] = PairSeparator::ALL;
    [
        pair_key(&a, &b, single),
        pair_key(&b, &a, single),
        pair_key(&a, &b, double),
        pair_key(&b, &a, double),
    ]
}

pub fn find_interaction<'a>(
    store: &'a InteractionStore,
    a: &str,
    b: &str,
) -> Option<&'a InteractionRecord> {
    let hit = candidate_keys(a, b)
        .into_iter()
        .find_map(|k| store.get(&k).map(|r| (k, r)));
    match hit {
        Some((key, record)) => {
            tracing::debug!(%key, severity = %record.severity, "interaction found");
            Some(record)
        }
        None => None,
    }
}

pub fn interaction_report(store: &InteractionStore, a: &str, b: &str) -> InteractionReport {
    let pair = [normalize(a), normalize(b)];
    match find_interaction(store, a, b) {
        Some(r) => InteractionReport::Found {
            pair,
            severity: r.severity,
            description: r.description.clone(),
            advice: r.advice.clone(),
        },
        None => InteractionReport::NotFound { pair },
    }
}
