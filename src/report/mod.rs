pub mod json;
pub mod md;

use crate::error::TallyError;
use crate::snapshot::Snapshot;
use crate::types::results::ResultsBundle;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Display rounding. The bundle itself always carries full precision.
    pub decimals: usize,
    pub full_ranking: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            full_ranking: false,
        }
    }
}

pub fn render(
    snapshot: &Snapshot,
    bundle: &ResultsBundle,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, TallyError> {
    match format {
        OutputFormat::Json => json::to_json(bundle).map_err(TallyError::Json),
        OutputFormat::Md => Ok(md::to_markdown(snapshot, bundle, options)),
    }
}
