use serde::Serialize;
use std::collections::BTreeMap;

/// One entrant's position in a ranking. Scores carry full precision;
/// rounding is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedScore {
    pub entrant_name: String,
    pub score: f64,
}

/// Ranking for one subcategory name, scored by absolute (unweighted,
/// pre-penalty) subcategory score.
#[derive(Debug, Clone, Serialize)]
pub struct SubcategoryRanking {
    pub title: String,
    pub podium: Vec<RankedScore>,
    /// Full unordered score list, kept for audit views.
    pub scores: Vec<RankedScore>,
}

/// One entrant's net score per category name.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub entrant_name: String,
    pub categories: BTreeMap<String, f64>,
}

/// One entrant's weighted score per category name, plus the derived total,
/// which equals the entrant's overall score.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedRow {
    pub entrant_name: String,
    pub categories: BTreeMap<String, f64>,
    pub total: f64,
}

/// Category column metadata in rubric order, so presenters can lay out the
/// matrices without re-reading the rubric.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryColumn {
    pub name: String,
    pub weight: f64,
}

/// Everything one aggregation run produces.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsBundle {
    /// Top 3 by overall score.
    pub overall: Vec<RankedScore>,
    /// Complete ranked list, same ordering policy.
    pub overall_full: Vec<RankedScore>,
    pub by_subcategory: Vec<SubcategoryRanking>,
    pub net_by_category: Vec<CategoryRow>,
    pub weighted_by_category: Vec<WeightedRow>,
    pub category_columns: Vec<CategoryColumn>,
}
