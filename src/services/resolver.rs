use crate::config::LookupSettings;
use crate::dataset::{normalize, BrandMapping};
use crate::domain::models::{MatchMethod, Resolution, ResolvedDrug, Suggestion};
use crate::services::fuzzy::close_matches;

/// Resolves free-text drug names to generic names.
///
/// Order of precedence: exact brand match, a picked fuzzy suggestion, then a
/// generic name typed directly.
pub struct NameResolver<'a> {
    brands: &'a BrandMapping,
    settings: &'a LookupSettings,
}

impl<'a> NameResolver<'a> {
    pub fn new(brands: &'a BrandMapping, settings: &'a LookupSettings) -> Self {
        Self { brands, settings }
    }

    /// Brand keys similar to `raw`, best first. Empty input has no candidates.
    pub fn candidates(&self, raw: &str) -> Vec<String> {
        self.scored(raw, self.settings.max_suggestions, self.settings.fuzzy_cutoff)
            .into_iter()
            .map(|s| s.brand)
            .collect()
    }

    pub fn scored(&self, raw: &str, limit: usize, cutoff: f64) -> Vec<Suggestion> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return vec![];
        }
        close_matches(&normalized, self.brands.brand_names(), limit, cutoff)
            .into_iter()
            .filter_map(|m| {
                let generic = self.brands.get(&m.candidate)?.to_string();
                Some(Suggestion {
                    brand: m.candidate,
                    generic,
                    score: m.score,
                })
            })
            .collect()
    }

    /// Resolves `raw`, committing to `pick` when it is one of the fuzzy
    /// candidates.
    pub fn resolve(&self, raw: &str, pick: Option<&str>) -> Resolution {
        self.resolve_with(raw, |_, _| pick.map(str::to_string))
    }

    /// Resolves `raw`, asking `choose` to pick among the fuzzy candidates
    /// when there is no exact brand match. `choose` is not called when there
    /// are no candidates.
    pub fn resolve_with<F>(&self, raw: &str, choose: F) -> Resolution
    where
        F: FnOnce(&str, &[String]) -> Option<String>,
    {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Resolution::Unresolved {
                input: raw.to_string(),
                suggestions: vec![],
            };
        }

        if let Some(generic) = self.brands.get(&normalized) {
            tracing::debug!(input = raw, brand = %normalized, generic, "exact brand match");
            return Resolution::Resolved(ResolvedDrug {
                input: raw.to_string(),
                brand_key: Some(normalized),
                generic: generic.to_string(),
                method: MatchMethod::Exact,
            });
        }

        let mut candidates = self.candidates(&normalized);
        if !candidates.is_empty() {
            if let Some(choice) = choose(raw, &candidates) {
                let choice = normalize(&choice);
                if candidates.contains(&choice) {
                    if let Some(generic) = self.brands.get(&choice) {
                        tracing::debug!(input = raw, brand = %choice, generic, "suggestion picked");
                        return Resolution::Resolved(ResolvedDrug {
                            input: raw.to_string(),
                            generic: generic.to_string(),
                            brand_key: Some(choice),
                            method: MatchMethod::Suggestion,
                        });
                    }
                } else if !choice.is_empty() {
                    tracing::warn!(input = raw, pick = %choice, "pick is not among the suggestions; ignored");
                }
            }
        }

        if self.brands.is_generic(&normalized) {
            tracing::debug!(input = raw, generic = %normalized, "generic name match");
            return Resolution::Resolved(ResolvedDrug {
                input: raw.to_string(),
                brand_key: None,
                generic: normalized,
                method: MatchMethod::Generic,
            });
        }

        candidates.truncate(self.settings.reported_suggestions);
        tracing::debug!(input = raw, suggestions = candidates.len(), "unresolved");
        Resolution::Unresolved {
            input: raw.to_string(),
            suggestions: candidates,
        }
    }
}
