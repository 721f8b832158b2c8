pub mod index;
pub mod ranking;
pub mod rollup;

use crate::types::penalty::PenaltyApplication;
use crate::types::results::{
    CategoryColumn, CategoryRow, RankedScore, ResultsBundle, SubcategoryRanking, WeightedRow,
};
use crate::types::rubric::Rubric;
use crate::types::vote::{Entrant, Vote};
use index::VoteIndex;

/// One aggregation run: folds the votes and penalties through the rubric
/// for every entrant and shapes the four result views. Pure and total over
/// its inputs; nothing is mutated and sparse data never errors.
pub fn aggregate(
    rubric: &Rubric,
    entrants: &[Entrant],
    votes: &[Vote],
    penalties: &[PenaltyApplication],
) -> ResultsBundle {
    let index = VoteIndex::build(votes);

    let scorecards: Vec<_> = entrants
        .iter()
        .map(|entrant| rollup::score_entrant(rubric, &index, penalties, entrant))
        .collect();

    let overall_scores: Vec<RankedScore> = scorecards
        .iter()
        .map(|card| RankedScore {
            entrant_name: card.entrant_name.clone(),
            score: card.overall,
        })
        .collect();

    // One ranking per distinct subcategory name, in rubric order of first
    // appearance.
    let mut titles: Vec<String> = Vec::new();
    for category in &rubric.categories {
        for subcategory in &category.subcategories {
            if !titles.contains(&subcategory.name) {
                titles.push(subcategory.name.clone());
            }
        }
    }
    let by_subcategory: Vec<SubcategoryRanking> = titles
        .into_iter()
        .map(|title| {
            let scores: Vec<RankedScore> = scorecards
                .iter()
                .flat_map(|card| {
                    card.subcategory_absolutes
                        .iter()
                        .filter(|(name, _)| *name == title)
                        .map(|(_, score)| RankedScore {
                            entrant_name: card.entrant_name.clone(),
                            score: *score,
                        })
                })
                .collect();
            SubcategoryRanking {
                podium: ranking::podium(&scores),
                title,
                scores,
            }
        })
        .collect();

    let net_by_category = scorecards
        .iter()
        .map(|card| CategoryRow {
            entrant_name: card.entrant_name.clone(),
            categories: card.net_by_category.clone(),
        })
        .collect();
    let weighted_by_category = scorecards
        .iter()
        .map(|card| WeightedRow {
            entrant_name: card.entrant_name.clone(),
            total: card.weighted_by_category.values().sum(),
            categories: card.weighted_by_category.clone(),
        })
        .collect();

    let category_columns = rubric
        .categories
        .iter()
        .map(|category| CategoryColumn {
            name: category.name.clone(),
            weight: category.weight,
        })
        .collect();

    tracing::debug!(entrants = scorecards.len(), "aggregation complete");

    ResultsBundle {
        overall: ranking::podium(&overall_scores),
        overall_full: ranking::rank(&overall_scores),
        by_subcategory,
        net_by_category,
        weighted_by_category,
        category_columns,
    }
}
