use serde::Deserialize;

/// One application of a penalty rule to an entrant. Multiple applications
/// per entrant all contribute cumulatively.
#[derive(Debug, Clone, Deserialize)]
pub struct PenaltyApplication {
    #[serde(alias = "colegioId")]
    pub entrant_id: String,
    #[serde(alias = "colegioNombre", default)]
    pub entrant_name: String,
    #[serde(alias = "nombrePenalizacion", default)]
    pub rule_name: String,
    #[serde(alias = "deducciones", default)]
    pub deductions: Vec<Deduction>,
}

/// Signed points added to one category's net score. The engine is
/// convention-agnostic: whatever value is stored gets added verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Deduction {
    #[serde(alias = "categoriaId")]
    pub category_id: String,
    #[serde(alias = "categoriaNombre", default)]
    pub category_name: String,
    #[serde(alias = "puntos", default)]
    pub points: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_export_field_names() {
        let penalty: PenaltyApplication = serde_json::from_str(
            r#"{
                "colegioId": "e1",
                "colegioNombre": "Colegio Sur",
                "nombrePenalizacion": "Exceso de tiempo",
                "deducciones": [
                    {"categoriaId": "cat-1", "categoriaNombre": "Música", "puntos": -10}
                ]
            }"#,
        )
        .expect("penalty should parse");

        assert_eq!(penalty.rule_name, "Exceso de tiempo");
        assert_eq!(penalty.deductions[0].points, -10.0);
        assert_eq!(penalty.deductions[0].category_name, "Música");
    }
}
