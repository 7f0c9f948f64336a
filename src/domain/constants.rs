pub const MAPPING_FILE: &str = "drug_name_mapping.json";
pub const INTERACTIONS_FILE: &str = "interactions_db.json";
pub const SIDE_EFFECTS_FILE: &str = "side_effects_db.json";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DATA_DIR_ENV: &str = "DRUGCHECK_DATA_DIR";
pub const LOG_ENV: &str = "DRUGCHECK_LOG";

pub const FUZZY_CUTOFF: f64 = 0.5;
pub const MAX_SUGGESTIONS: usize = 10;
pub const REPORTED_SUGGESTIONS: usize = 5;

/// Exit status for one-shot commands whose input did not resolve.
pub const EXIT_UNRESOLVED: u8 = 2;
