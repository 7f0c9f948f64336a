use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Moderate, Severity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "moderate" => Ok(Severity::Moderate),
            "high" => Ok(Severity::High),
            other => Err(format!(
                "unknown severity `{}` (expected Low, Moderate or High)",
                other
            )),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

/// One stored interaction. All fields are required in the dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InteractionRecord {
    pub severity: Severity,
    pub description: String,
    pub advice: String,
}

/// Separator between the two generic names of a pair key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PairSeparator {
    /// `a|b`
    Single,
    /// `a||b`
    Double,
}

impl PairSeparator {
    pub const ALL: [PairSeparator; 2] = [PairSeparator::Single, PairSeparator::Double];

    pub fn as_str(&self) -> &'static str {
        match self {
            PairSeparator::Single => "|",
            PairSeparator::Double => "||",
        }
    }
}

pub fn pair_key(a: &str, b: &str, sep: PairSeparator) -> String {
    format!("{}{}{}", a, sep.as_str(), b)
}

/// Splits a stored pair key into its two names. `||` is checked first since
/// it also contains `|`.
pub fn split_pair_key(key: &str) -> Option<(&str, &str, PairSeparator)> {
    let (a, b, sep) = if let Some((a, b)) = key.split_once("||") {
        (a, b, PairSeparator::Double)
    } else {
        let (a, b) = key.split_once('|')?;
        (a, b, PairSeparator::Single)
    };
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() || b.contains('|') {
        return None;
    }
    Some((a, b, sep))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// Input was a known brand name.
    Exact,
    /// A fuzzy suggestion was picked.
    Suggestion,
    /// Input was a generic name.
    Generic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDrug {
    pub input: String,
    pub brand_key: Option<String>,
    pub generic: String,
    pub method: MatchMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Resolved(ResolvedDrug),
    Unresolved {
        input: String,
        suggestions: Vec<String>,
    },
}

impl Resolution {
    pub fn generic(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(d) => Some(&d.generic),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn brand_key(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(d) => d.brand_key.as_deref(),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InteractionReport {
    Found {
        pair: [String; 2],
        severity: Severity,
        description: String,
        advice: String,
    },
    NotFound {
        pair: [String; 2],
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SideEffectsReport {
    Known { generic: String, effects: Vec<String> },
    NoData { generic: String },
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub drugs: Vec<Resolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<InteractionReport>,
    pub side_effects: Vec<SideEffectsReport>,
}

impl CheckReport {
    pub fn all_resolved(&self) -> bool {
        self.drugs.iter().all(Resolution::is_resolved)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub brand: String,
    pub generic: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct FileDigest {
    pub file: String,
    pub present: bool,
    pub sha256: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub data_dir: String,
    pub brands: usize,
    pub generics: usize,
    pub interactions: usize,
    pub single_separator_keys: usize,
    pub double_separator_keys: usize,
    pub side_effects: usize,
    pub unknown_generics: Vec<String>,
    pub files: Vec<FileDigest>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub out_dir: String,
    pub generics: usize,
    pub interactions: usize,
    pub side_effects: usize,
    pub separator: PairSeparator,
}
