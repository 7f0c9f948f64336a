use crate::domain::constants::{INTERACTIONS_FILE, MAPPING_FILE, SIDE_EFFECTS_FILE};
use crate::domain::models::{pair_key, split_pair_key, InteractionRecord};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("missing dataset file: {}", .0.display())]
    Missing(PathBuf),
    #[error("dataset file is empty: {}", .0.display())]
    Empty(PathBuf),
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid pair key `{}` in {}", .key, .path.display())]
    InvalidPairKey { path: PathBuf, key: String },
    #[error("pair key `{}` appears more than once in {}", .key, .path.display())]
    DuplicatePairKey { path: PathBuf, key: String },
    #[error(
        "brand `{}` maps to both `{}` and `{}` in {}",
        .brand,
        .first,
        .second,
        .path.display()
    )]
    ConflictingBrand {
        path: PathBuf,
        brand: String,
        first: String,
        second: String,
    },
}

pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalized brand name -> generic name.
#[derive(Debug, Default, Clone)]
pub struct BrandMapping {
    brands: BTreeMap<String, String>,
    generics: BTreeSet<String>,
}

impl BrandMapping {
    /// Builds the mapping from raw entries, normalizing both sides.
    pub fn from_raw<I>(entries: I) -> Result<Self, (String, String, String)>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut brands: BTreeMap<String, String> = BTreeMap::new();
        for (brand, generic) in entries {
            let brand = normalize(&brand);
            let generic = normalize(&generic);
            if brand.is_empty() || generic.is_empty() {
                continue;
            }
            if let Some(existing) = brands.get(&brand) {
                if existing != &generic {
                    return Err((brand, existing.clone(), generic));
                }
                continue;
            }
            brands.insert(brand, generic);
        }
        let generics = brands.values().cloned().collect();
        Ok(Self { brands, generics })
    }

    pub fn get(&self, brand: &str) -> Option<&str> {
        self.brands.get(brand).map(String::as_str)
    }

    /// Brand keys in sorted order.
    pub fn brand_names(&self) -> impl Iterator<Item = &str> {
        self.brands.keys().map(String::as_str)
    }

    pub fn generic_names(&self) -> impl Iterator<Item = &str> {
        self.generics.iter().map(String::as_str)
    }

    pub fn is_generic(&self, name: &str) -> bool {
        self.generics.contains(name)
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

#[derive(Debug, Default, Clone)]
pub struct InteractionStore {
    records: HashMap<String, InteractionRecord>,
}

impl InteractionStore {
    pub fn new(records: HashMap<String, InteractionRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, key: &str) -> Option<&InteractionRecord> {
        self.records.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Default, Clone)]
pub struct SideEffectsTable {
    effects: HashMap<String, Vec<String>>,
}

impl SideEffectsTable {
    pub fn new(effects: HashMap<String, Vec<String>>) -> Self {
        Self { effects }
    }

    pub fn get(&self, generic: &str) -> Option<&[String]> {
        self.effects.get(generic).map(Vec::as_slice)
    }

    pub fn generics(&self) -> impl Iterator<Item = &str> {
        self.effects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Paths of the three dataset files.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub dir: PathBuf,
    pub mapping: PathBuf,
    pub interactions: PathBuf,
    pub side_effects: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            mapping: dir.join(MAPPING_FILE),
            interactions: dir.join(INTERACTIONS_FILE),
            side_effects: dir.join(SIDE_EFFECTS_FILE),
            dir,
        }
    }

    pub fn files(&self) -> [&Path; 3] {
        [
            self.mapping.as_path(),
            self.interactions.as_path(),
            self.side_effects.as_path(),
        ]
    }
}

/// Immutable in-memory snapshot of all datasets.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    pub brands: BrandMapping,
    pub interactions: InteractionStore,
    pub side_effects: SideEffectsTable,
}

impl Dataset {
    pub fn load(paths: &DataPaths) -> Result<Self, DatasetError> {
        let brands = load_brand_mapping(&paths.mapping)?;
        let interactions = load_interactions(&paths.interactions)?;
        let side_effects = load_side_effects(&paths.side_effects)?;
        tracing::info!(
            brands = brands.len(),
            generics = brands.generics.len(),
            interactions = interactions.len(),
            side_effects = side_effects.len(),
            dir = %paths.dir.display(),
            "datasets loaded"
        );
        Ok(Self {
            brands,
            interactions,
            side_effects,
        })
    }
}

static SNAPSHOT: OnceCell<Dataset> = OnceCell::new();

/// Loads the datasets on first call and returns the same snapshot afterwards.
pub fn snapshot(paths: &DataPaths) -> Result<&'static Dataset, DatasetError> {
    SNAPSHOT.get_or_try_init(|| Dataset::load(paths))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if raw.trim().is_empty() {
        return Err(DatasetError::Empty(path.to_path_buf()));
    }
    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The mapping is required: a missing or empty file is fatal.
pub fn load_brand_mapping(path: &Path) -> Result<BrandMapping, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::Missing(path.to_path_buf()));
    }
    let raw: BTreeMap<String, String> = read_json(path)?;
    let mapping = BrandMapping::from_raw(raw).map_err(|(brand, first, second)| {
        DatasetError::ConflictingBrand {
            path: path.to_path_buf(),
            brand,
            first,
            second,
        }
    })?;
    if mapping.is_empty() {
        return Err(DatasetError::Empty(path.to_path_buf()));
    }
    Ok(mapping)
}

pub fn load_interactions(path: &Path) -> Result<InteractionStore, DatasetError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "interactions dataset not found; no interactions known");
        return Ok(InteractionStore::default());
    }
    let raw: BTreeMap<String, InteractionRecord> = match read_json(path) {
        Err(DatasetError::Empty(_)) => BTreeMap::new(),
        other => other?,
    };
    let mut records = HashMap::with_capacity(raw.len());
    for (key, record) in raw {
        let Some((a, b, sep)) = split_pair_key(&key) else {
            return Err(DatasetError::InvalidPairKey {
                path: path.to_path_buf(),
                key,
            });
        };
        // Stored keys are matched against normalized names.
        let canonical = pair_key(&normalize(a), &normalize(b), sep);
        if records.insert(canonical.clone(), record).is_some() {
            return Err(DatasetError::DuplicatePairKey {
                path: path.to_path_buf(),
                key: canonical,
            });
        }
    }
    Ok(InteractionStore::new(records))
}

pub fn load_side_effects(path: &Path) -> Result<SideEffectsTable, DatasetError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "side effects dataset not found; no side effects known");
        return Ok(SideEffectsTable::default());
    }
    let effects: HashMap<String, Vec<String>> = match read_json(path) {
        Err(DatasetError::Empty(_)) => HashMap::new(),
        other => other?,
    };
    Ok(SideEffectsTable::new(effects))
}
