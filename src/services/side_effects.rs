use crate::dataset::{normalize, SideEffectsTable};
use crate::domain::models::SideEffectsReport;

/// Side effects of a generic. Unknown generics and empty lists both report
/// `NoData`.
pub fn side_effects_report(table: &SideEffectsTable, generic: &str) -> SideEffectsReport {
    let generic = normalize(generic);
    match table.get(&generic) {
        Some(effects) if !effects.is_empty() => SideEffectsReport::Known {
            effects: effects.to_vec(),
            generic,
        },
        _ => SideEffectsReport::NoData { generic },
    }
}
