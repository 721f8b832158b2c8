use serde::{Deserialize, Serialize};

/// How a category combines its subcategory scores. Historically this was
/// dispatched on the category name; snapshots written by the current editor
/// carry the mode explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Subcategory scores scaled by their percentage weight.
    #[default]
    Weighted,
    /// Straight sum of subcategory scores; weights are inert.
    Sum,
}

/// The weighted evaluation hierarchy an event is scored against. The engine
/// trusts it as given: weights are never validated here, a missing weight
/// simply contributes zero.
#[derive(Debug, Clone, Deserialize)]
pub struct Rubric {
    #[serde(alias = "categorias")]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    /// Percentage of the overall score. Siblings are intended to sum to 100,
    /// enforced by `validate`, not by the engine.
    #[serde(alias = "peso", default)]
    pub weight: f64,
    /// `None` means the snapshot predates the field; the loader resolves it
    /// via `migrate_legacy_aggregation`.
    #[serde(default)]
    pub aggregation: Option<AggregationMode>,
    #[serde(alias = "subcategorias", default)]
    pub subcategories: Vec<Subcategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Subcategory {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    /// Percentage of the parent category.
    #[serde(alias = "peso", default)]
    pub weight: f64,
    #[serde(alias = "criterios", default)]
    pub criteria: Vec<Criterion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Criterion {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    /// Ceiling a single judge may award.
    #[serde(alias = "puntajeMaximo", alias = "maxScore", default)]
    pub max_score: f64,
}

impl Category {
    pub fn aggregation_mode(&self) -> AggregationMode {
        self.aggregation.unwrap_or_default()
    }
}

impl Rubric {
    /// Legacy snapshots carry no aggregation mode; the historical rule keyed
    /// the straight-sum behavior on the category named "Música". That name
    /// dispatch lives only in this migration shim, never in the rollup.
    pub fn migrate_legacy_aggregation(&mut self) {
        for category in &mut self.categories {
            if category.aggregation.is_none() {
                category.aggregation = Some(if category.name == "Música" {
                    AggregationMode::Sum
                } else {
                    AggregationMode::Weighted
                });
            }
        }
    }

    /// Every criterion id in the rubric, in rubric order.
    pub fn criterion_ids(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|category| &category.subcategories)
            .flat_map(|subcategory| &subcategory.criteria)
            .map(|criterion| criterion.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_export_field_names() {
        let rubric: Rubric = serde_json::from_str(
            r#"{
                "categorias": [{
                    "id": "cat-1",
                    "nombre": "Coreografía",
                    "peso": 40,
                    "subcategorias": [{
                        "id": "sub-1",
                        "nombre": "Sincronización",
                        "peso": 70,
                        "criterios": [{"id": "cri-1", "nombre": "Precisión", "puntajeMaximo": 10}]
                    }]
                }]
            }"#,
        )
        .expect("legacy rubric should parse");

        let category = &rubric.categories[0];
        assert_eq!(category.name, "Coreografía");
        assert_eq!(category.weight, 40.0);
        assert!(category.aggregation.is_none());
        assert_eq!(category.subcategories[0].criteria[0].max_score, 10.0);
    }

    #[test]
    fn migration_marks_only_the_legacy_sum_category() {
        let mut rubric: Rubric = serde_json::from_str(
            r#"{
                "categorias": [
                    {"id": "a", "nombre": "Música", "peso": 60},
                    {"id": "b", "nombre": "Coreografía", "peso": 40}
                ]
            }"#,
        )
        .expect("rubric should parse");

        rubric.migrate_legacy_aggregation();
        assert_eq!(rubric.categories[0].aggregation_mode(), AggregationMode::Sum);
        assert_eq!(
            rubric.categories[1].aggregation_mode(),
            AggregationMode::Weighted
        );
    }

    #[test]
    fn migration_respects_an_explicit_mode() {
        let mut rubric: Rubric = serde_json::from_str(
            r#"{
                "categories": [
                    {"id": "a", "nombre": "Música", "peso": 60, "aggregation": "weighted"}
                ]
            }"#,
        )
        .expect("rubric should parse");

        rubric.migrate_legacy_aggregation();
        assert_eq!(
            rubric.categories[0].aggregation_mode(),
            AggregationMode::Weighted
        );
    }

    #[test]
    fn criterion_ids_walk_the_whole_hierarchy() {
        let rubric: Rubric = serde_json::from_str(
            r#"{
                "categories": [
                    {"id": "a", "nombre": "A", "subcategorias": [
                        {"id": "s1", "nombre": "S1", "criterios": [
                            {"id": "c1", "nombre": "C1"},
                            {"id": "c2", "nombre": "C2"}
                        ]},
                        {"id": "s2", "nombre": "S2", "criterios": [
                            {"id": "c3", "nombre": "C3"}
                        ]}
                    ]}
                ]
            }"#,
        )
        .expect("rubric should parse");

        assert_eq!(rubric.criterion_ids(), vec!["c1", "c2", "c3"]);
    }
}
