//! Synthetic dataset generation.
//!
//! Produces an interaction record for every unordered pair of generic names
//! in a brand mapping, plus a side-effect list per generic. The text is canned
//! demo data, not pharmacological fact.

use crate::dataset::BrandMapping;
use crate::domain::constants::{INTERACTIONS_FILE, SIDE_EFFECTS_FILE};
use crate::domain::models::{pair_key, InteractionRecord, PairSeparator, Severity};
use anyhow::Context;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::path::Path;

const RISKS: [&str; 10] = [
    "may increase the risk of bleeding",
    "can cause significant liver toxicity when combined",
    "can lead to kidney damage",
    "may reduce the effectiveness of one or both drugs",
    "can cause dangerous drops in blood pressure",
    "may cause irregular heart rhythm",
    "increases the risk of severe allergic reactions",
    "can cause gastrointestinal bleeding",
    "may increase sedation and dizziness",
    "can result in dangerous interactions with alcohol",
];

const ADVICE: &str = "Avoid combination if possible or monitor closely under medical supervision.";

const KNOWN_SIDE_EFFECTS: [(&str, [&str; 3]); 6] = [
    ("acetaminophen", ["Liver damage", "Nausea", "Rash"]),
    ("ibuprofen", ["Stomach pain", "Nausea", "Dizziness"]),
    ("aspirin", ["Bleeding", "Heartburn", "Nausea"]),
    ("metformin", ["Diarrhea", "Nausea", "Metallic taste"]),
    ("amoxicillin", ["Rash", "Diarrhea", "Nausea"]),
    ("atorvastatin", ["Muscle pain", "Headache", "Nausea"]),
];

const DEFAULT_SIDE_EFFECTS: [&str; 3] = ["Dizziness", "Fatigue", "Headache"];

#[derive(Debug, Default)]
pub struct GeneratedDataset {
    pub interactions: BTreeMap<String, InteractionRecord>,
    pub side_effects: BTreeMap<String, Vec<String>>,
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn generate<R: Rng + ?Sized>(
    brands: &BrandMapping,
    rng: &mut R,
    separator: PairSeparator,
) -> GeneratedDataset {
    let generics: Vec<&str> = brands.generic_names().collect();
    let mut out = GeneratedDataset::default();

    for (i, first) in generics.iter().enumerate() {
        for second in &generics[i + 1..] {
            let risk = RISKS.choose(rng).copied().unwrap_or(RISKS[0]);
            let severity = Severity::ALL.choose(rng).copied().unwrap_or(Severity::Low);
            let description = format!(
                "Taking {} with {} {}. Consult your healthcare provider before combining these medications.",
                capitalize(first),
                capitalize(second),
                risk
            );
            out.interactions.insert(
                pair_key(first, second, separator),
                InteractionRecord {
                    severity,
                    description,
                    advice: ADVICE.to_string(),
                },
            );
        }
    }

    for generic in generics {
        let effects = match KNOWN_SIDE_EFFECTS.iter().find(|(g, _)| *g == generic) {
            Some((_, known)) => known.iter().map(|s| s.to_string()).collect(),
            None => DEFAULT_SIDE_EFFECTS
                .choose_multiple(rng, DEFAULT_SIDE_EFFECTS.len())
                .map(|s| s.to_string())
                .collect(),
        };
        out.side_effects.insert(generic.to_string(), effects);
    }

    out
}

pub fn write_dataset(out_dir: &Path, data: &GeneratedDataset) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let interactions = out_dir.join(INTERACTIONS_FILE);
    std::fs::write(&interactions, serde_json::to_string_pretty(&data.interactions)?)
        .with_context(|| format!("failed to write {}", interactions.display()))?;
    let side_effects = out_dir.join(SIDE_EFFECTS_FILE);
    std::fs::write(&side_effects, serde_json::to_string_pretty(&data.side_effects)?)
        .with_context(|| format!("failed to write {}", side_effects.display()))?;
    tracing::info!(
        interactions = data.interactions.len(),
        side_effects = data.side_effects.len(),
        dir = %out_dir.display(),
        "dataset written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{load_interactions, load_side_effects};
    use crate::services::interactions::find_interaction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn mapping() -> BrandMapping {
        BrandMapping::from_raw([
            ("Tylenol".to_string(), "acetaminophen".to_string()),
            ("Advil".to_string(), "ibuprofen".to_string()),
            ("Motrin".to_string(), "ibuprofen".to_string()),
            ("Zocor".to_string(), "simvastatin".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn every_unordered_pair_gets_one_record() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = generate(&mapping(), &mut rng, PairSeparator::Single);
        assert_eq!(data.interactions.len(), 3);
        assert!(data.interactions.contains_key("acetaminophen|ibuprofen"));
        assert!(data.interactions.contains_key("ibuprofen|simvastatin"));
        let r = &data.interactions["acetaminophen|simvastatin"];
        assert!(r.description.starts_with("Taking Acetaminophen with Simvastatin "));
        assert_eq!(r.advice, ADVICE);
    }

    #[test]
    fn side_effects_use_canned_lists_then_defaults() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = generate(&mapping(), &mut rng, PairSeparator::Double);
        assert_eq!(
            data.side_effects["acetaminophen"],
            vec!["Liver damage", "Nausea", "Rash"]
        );
        let mut fallback = data.side_effects["simvastatin"].clone();
        fallback.sort();
        assert_eq!(fallback, vec!["Dizziness", "Fatigue", "Headache"]);
    }

    #[test]
    fn same_seed_same_output() {
        let a = generate(&mapping(), &mut StdRng::seed_from_u64(42), PairSeparator::Single);
        let b = generate(&mapping(), &mut StdRng::seed_from_u64(42), PairSeparator::Single);
        assert_eq!(a.interactions, b.interactions);
        assert_eq!(a.side_effects, b.side_effects);
    }

    #[test]
    fn written_files_load_back_and_resolve_either_separator() {
        let tmp = TempDir::new().unwrap();
        for sep in PairSeparator::ALL {
            let data = generate(&mapping(), &mut StdRng::seed_from_u64(1), sep);
            write_dataset(tmp.path(), &data).unwrap();
            let store = load_interactions(&tmp.path().join(INTERACTIONS_FILE)).unwrap();
            assert_eq!(store.len(), 3);
            assert!(find_interaction(&store, "simvastatin", "acetaminophen").is_some());
            let effects = load_side_effects(&tmp.path().join(SIDE_EFFECTS_FILE)).unwrap();
            assert_eq!(effects.len(), 3);
        }
    }

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("iBUPROFEN"), "Ibuprofen");
        assert_eq!(capitalize(""), "");
    }
}
