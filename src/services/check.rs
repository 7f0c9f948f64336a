use crate::dataset::Dataset;
use crate::domain::models::{CheckReport, Resolution};
use crate::services::interactions::interaction_report;
use crate::services::side_effects::side_effects_report;

/// Interaction and side effects for two resolutions. Nothing is looked up
/// unless both names resolved.
pub fn build_check_report(dataset: &Dataset, first: Resolution, second: Resolution) -> CheckReport {
    let (interaction, side_effects) = match (first.generic(), second.generic()) {
        (Some(a), Some(b)) => (
            Some(interaction_report(&dataset.interactions, a, b)),
            vec![
                side_effects_report(&dataset.side_effects, a),
                side_effects_report(&dataset.side_effects, b),
            ],
        ),
        _ => (None, vec![]),
    };
    CheckReport {
        drugs: vec![first, second],
        interaction,
        side_effects,
    }
}
