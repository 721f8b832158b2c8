use serde::Deserialize;
use std::collections::BTreeMap;

/// A competing school or ensemble, the unit being ranked.
#[derive(Debug, Clone, Deserialize)]
pub struct Entrant {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
}

/// A judge assigned to the event.
#[derive(Debug, Clone, Deserialize)]
pub struct Judge {
    #[serde(alias = "juezId")]
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
}

/// One judge's submission for one entrant. A criterion mapped to `null`, or
/// absent from the map, has not been scored yet.
#[derive(Debug, Clone, Deserialize)]
pub struct Vote {
    #[serde(alias = "schoolId")]
    pub entrant_id: String,
    #[serde(alias = "schoolName", default)]
    pub entrant_name: String,
    #[serde(alias = "juezId")]
    pub judge_id: String,
    #[serde(alias = "puntuaciones", default)]
    pub scores: BTreeMap<String, Option<f64>>,
    #[serde(alias = "comentario", default)]
    pub comment: String,
    /// Derived total the voting form stores alongside the raw scores.
    #[serde(alias = "totalScore", default)]
    pub total_score: f64,
    /// Derived completeness flag stored at submission time. The audit
    /// recomputes it against the rubric and reports disagreements.
    #[serde(alias = "isComplete", default)]
    pub is_complete: bool,
}

impl Vote {
    /// Sum of the scores actually present.
    pub fn computed_total(&self) -> f64 {
        self.scores.values().flatten().sum()
    }

    /// True only if every given criterion has a non-null score.
    pub fn covers_all<'a, I>(&self, criterion_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        criterion_ids
            .into_iter()
            .all(|id| matches!(self.scores.get(id), Some(Some(_))))
    }
}
