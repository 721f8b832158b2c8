use crate::types::results::ResultsBundle;

pub fn to_json(bundle: &ResultsBundle) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(bundle)
}
