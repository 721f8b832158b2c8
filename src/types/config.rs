use crate::error::TallyError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Display rounding for rendered reports. Computation is never rounded.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Always include the full ranked list, not just the podium.
    #[serde(default)]
    pub full_ranking: bool,
}

fn default_decimals() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            full_ranking: false,
        }
    }
}

impl TallyConfig {
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.output.decimals > 6 {
            return Err(TallyError::ConfigParse(
                "output.decimals must be at most 6".to_string(),
            ));
        }
        Ok(())
    }
}
