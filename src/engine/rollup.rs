use super::index::VoteIndex;
use crate::types::penalty::PenaltyApplication;
use crate::types::rubric::{AggregationMode, Rubric};
use crate::types::vote::Entrant;
use std::collections::BTreeMap;

/// Everything the rollup derives for a single entrant. All values carry
/// full f64 precision; no rounding happens during computation.
#[derive(Debug, Clone)]
pub struct EntrantScorecard {
    pub entrant_name: String,
    pub overall: f64,
    /// Absolute (unweighted, pre-penalty) score per subcategory name, one
    /// entry per subcategory instance, in rubric order.
    pub subcategory_absolutes: Vec<(String, f64)>,
    pub net_by_category: BTreeMap<String, f64>,
    pub weighted_by_category: BTreeMap<String, f64>,
}

/// Mean of the scores contributed for one (entrant, criterion) pair. An
/// empty slice scores exactly 0: a criterion nobody judged contributes
/// nothing to the rollup rather than excluding the entrant.
pub fn criterion_average(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Walks the rubric top-down for one entrant: criterion averages roll into
/// subcategory absolutes, those combine into category absolutes per the
/// category's aggregation mode, penalties land on the category net, and the
/// category weight scales the net into the overall contribution.
pub fn score_entrant(
    rubric: &Rubric,
    index: &VoteIndex,
    penalties: &[PenaltyApplication],
    entrant: &Entrant,
) -> EntrantScorecard {
    let mut overall = 0.0;
    let mut subcategory_absolutes = Vec::new();
    let mut net_by_category = BTreeMap::new();
    let mut weighted_by_category = BTreeMap::new();

    for category in &rubric.categories {
        let mut category_absolute = 0.0;
        for subcategory in &category.subcategories {
            let mut subcategory_absolute = 0.0;
            for criterion in &subcategory.criteria {
                subcategory_absolute +=
                    criterion_average(index.scores(&entrant.id, &criterion.id));
            }
            subcategory_absolutes.push((subcategory.name.clone(), subcategory_absolute));

            category_absolute += match category.aggregation_mode() {
                AggregationMode::Sum => subcategory_absolute,
                AggregationMode::Weighted => subcategory_absolute * (subcategory.weight / 100.0),
            };
        }

        // Penalties enter here, at category granularity only. Deductions
        // naming a category id outside the rubric match nothing and are
        // silently ignored.
        let deducted: f64 = penalties
            .iter()
            .filter(|penalty| penalty.entrant_id == entrant.id)
            .flat_map(|penalty| &penalty.deductions)
            .filter(|deduction| deduction.category_id == category.id)
            .map(|deduction| deduction.points)
            .sum();

        let net = category_absolute + deducted;
        let weighted = net * (category.weight / 100.0);
        overall += weighted;
        net_by_category.insert(category.name.clone(), net);
        weighted_by_category.insert(category.name.clone(), weighted);
    }

    EntrantScorecard {
        entrant_name: entrant.name.clone(),
        overall,
        subcategory_absolutes,
        net_by_category,
        weighted_by_category,
    }
}
