use crate::types::vote::Vote;
use std::collections::HashMap;

/// Per-invocation lookup built from the flat vote list: entrant id →
/// criterion id → every raw score a judge contributed for that pair.
#[derive(Debug, Default)]
pub struct VoteIndex {
    by_entrant: HashMap<String, HashMap<String, Vec<f64>>>,
}

impl VoteIndex {
    pub fn build(votes: &[Vote]) -> Self {
        let mut by_entrant: HashMap<String, HashMap<String, Vec<f64>>> = HashMap::new();
        for vote in votes {
            let entrant = by_entrant.entry(vote.entrant_id.clone()).or_default();
            for (criterion_id, score) in &vote.scores {
                if let Some(score) = score {
                    entrant.entry(criterion_id.clone()).or_default().push(*score);
                }
            }
        }
        Self { by_entrant }
    }

    /// Scores contributed for one (entrant, criterion) pair. A criterion a
    /// judge left null or absent contributes nothing, not a zero.
    pub fn scores(&self, entrant_id: &str, criterion_id: &str) -> &[f64] {
        self.by_entrant
            .get(entrant_id)
            .and_then(|criteria| criteria.get(criterion_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
