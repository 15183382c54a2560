use crate::error::{CoreError, CoreResult};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Source documents, in the order their entries appear in the artifact.
pub const DEFAULT_SOURCES: [&str; 5] = ["gender", "ablist", "relationships", "lgbtq", "suicide"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub sources: Vec<String>,
    pub data_dir: PathBuf,
    pub output_path: PathBuf,
}

impl PipelineConfig {
    /// Fixed layout: `data/en/<source>.yml` in, `lib/patterns.json` out.
    pub fn for_workspace(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            data_dir: root.join("data").join("en"),
            output_path: root.join("lib").join("patterns.json"),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.sources.is_empty() {
            return Err(CoreError::InvalidInput(
                "at least one source document is required".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for s in &self.sources {
            if !seen.insert(s.as_str()) {
                return Err(CoreError::InvalidInput(format!(
                    "source document listed twice: {}",
                    s
                )));
            }
        }
        Ok(())
    }
}
