use crate::snapshot::Snapshot;
use crate::types::rubric::AggregationMode;
use std::collections::HashSet;

pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    fn new(id: &str, title: &str, body: String, blocking: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking,
        }
    }
}

/// Authoring checks the engine deliberately skips: the rollup trusts the
/// rubric as given, so mistakes it would silently absorb surface here
/// instead. Duplicate ids break the vote/penalty joins and are blocking;
/// weight drift only skews scores and warns.
pub fn validate(snapshot: &Snapshot) -> Vec<Finding> {
    let mut findings = Vec::new();
    let rubric = &snapshot.rubric;

    if rubric.categories.is_empty() {
        findings.push(Finding::new(
            "rubric.empty",
            "Rubric has no categories",
            "Every entrant would score zero; the rubric needs at least one category.".to_string(),
            true,
        ));
    }

    let category_weight_sum: f64 = rubric.categories.iter().map(|category| category.weight).sum();
    if !rubric.categories.is_empty()
        && (category_weight_sum - 100.0).abs() > WEIGHT_SUM_TOLERANCE
    {
        findings.push(Finding::new(
            "rubric.category_weights",
            "Category weights do not sum to 100",
            format!("Category weights sum to {category_weight_sum}; overall scores will be skewed."),
            false,
        ));
    }

    let mut category_ids = HashSet::new();
    for category in &rubric.categories {
        if !category_ids.insert(category.id.as_str()) {
            findings.push(Finding::new(
                "rubric.duplicate_category_id",
                "Duplicate category id",
                format!("Category id '{}' appears more than once; penalty joins become ambiguous.", category.id),
                true,
            ));
        }

        // Sum-mode categories ignore subcategory weights, so drift there is
        // inert and not worth a finding.
        if category.aggregation_mode() == AggregationMode::Weighted
            && !category.subcategories.is_empty()
        {
            let subcategory_weight_sum: f64 = category
                .subcategories
                .iter()
                .map(|subcategory| subcategory.weight)
                .sum();
            if (subcategory_weight_sum - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
                findings.push(Finding::new(
                    "rubric.subcategory_weights",
                    "Subcategory weights do not sum to 100",
                    format!(
                        "Subcategory weights in '{}' sum to {subcategory_weight_sum}.",
                        category.name
                    ),
                    false,
                ));
            }
        }

        let mut subcategory_ids = HashSet::new();
        for subcategory in &category.subcategories {
            if !subcategory_ids.insert(subcategory.id.as_str()) {
                findings.push(Finding::new(
                    "rubric.duplicate_subcategory_id",
                    "Duplicate subcategory id",
                    format!(
                        "Subcategory id '{}' appears more than once in '{}'.",
                        subcategory.id, category.name
                    ),
                    true,
                ));
            }

            let mut criterion_ids = HashSet::new();
            for criterion in &subcategory.criteria {
                if !criterion_ids.insert(criterion.id.as_str()) {
                    findings.push(Finding::new(
                        "rubric.duplicate_criterion_id",
                        "Duplicate criterion id",
                        format!(
                            "Criterion id '{}' appears more than once in '{}'; vote joins become ambiguous.",
                            criterion.id, subcategory.name
                        ),
                        true,
                    ));
                }
                if criterion.max_score <= 0.0 {
                    findings.push(Finding::new(
                        "rubric.nonpositive_max_score",
                        "Criterion max score is not positive",
                        format!(
                            "Criterion '{}' has max score {}; judges cannot award points on it.",
                            criterion.name, criterion.max_score
                        ),
                        false,
                    ));
                }
            }
        }
    }

    let known_categories: HashSet<&str> = rubric
        .categories
        .iter()
        .map(|category| category.id.as_str())
        .collect();
    for penalty in &snapshot.penalties {
        for deduction in &penalty.deductions {
            if !known_categories.contains(deduction.category_id.as_str()) {
                let label = if deduction.category_name.is_empty() {
                    deduction.category_id.clone()
                } else {
                    format!("{} ({})", deduction.category_name, deduction.category_id)
                };
                findings.push(Finding::new(
                    "penalty.unknown_category",
                    "Deduction references an unknown category",
                    format!(
                        "Penalty '{}' on {} names category {label}, which is not in the rubric; it contributes to no score.",
                        penalty.rule_name, penalty.entrant_name
                    ),
                    false,
                ));
            }
        }
    }

    findings
}
