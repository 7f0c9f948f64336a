use crate::dataset::{DataPaths, Dataset};
use crate::domain::models::{split_pair_key, DatasetSummary, FileDigest, PairSeparator};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::path::Path;

fn file_digest(path: &Path) -> anyhow::Result<FileDigest> {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if !path.exists() {
        return Ok(FileDigest {
            file,
            present: false,
            sha256: None,
        });
    }
    let mut hasher = Sha256::new();
    hasher.update(std::fs::read(path)?);
    Ok(FileDigest {
        file,
        present: true,
        sha256: Some(hex::encode(hasher.finalize())),
    })
}

/// Counts, cross-references and file digests for a loaded dataset.
pub fn summarize(dataset: &Dataset, paths: &DataPaths) -> anyhow::Result<DatasetSummary> {
    let mut single = 0usize;
    let mut double = 0usize;
    let mut unknown = BTreeSet::new();

    for key in dataset.interactions.keys() {
        let Some((a, b, sep)) = split_pair_key(key) else {
            continue;
        };
        match sep {
            PairSeparator::Single => single += 1,
            PairSeparator::Double => double += 1,
        }
        for name in [a, b] {
            if !dataset.brands.is_generic(name) {
                unknown.insert(name.to_string());
            }
        }
    }
    for generic in dataset.side_effects.generics() {
        if !dataset.brands.is_generic(generic) {
            unknown.insert(generic.to_string());
        }
    }
    if !unknown.is_empty() {
        tracing::warn!(count = unknown.len(), "dataset references unknown generic names");
    }

    let files = paths
        .files()
        .into_iter()
        .map(file_digest)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(DatasetSummary {
        data_dir: paths.dir.to_string_lossy().to_string(),
        brands: dataset.brands.len(),
        generics: dataset.brands.generic_names().count(),
        interactions: dataset.interactions.len(),
        single_separator_keys: single,
        double_separator_keys: double,
        side_effects: dataset.side_effects.len(),
        unknown_generics: unknown.into_iter().collect(),
        files,
    })
}
