use crate::error::{CoreError, CoreResult};
use crate::patterns::model::RawEntry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SOURCE_EXTENSION: &str = "yml";

/// Where named source documents come from.
pub trait SourceReader {
    fn read_source(&self, name: &str) -> CoreResult<String>;
}

/// Reads `<root>/<name>.yml`.
#[derive(Debug, Clone)]
pub struct DirectoryReader {
    root: PathBuf,
}

impl DirectoryReader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, SOURCE_EXTENSION))
    }
}

impl SourceReader for DirectoryReader {
    fn read_source(&self, name: &str) -> CoreResult<String> {
        let path = self.path_for(name);
        fs::read_to_string(&path)
            .map_err(|e| CoreError::shape(name, format!("cannot read {}: {}", path.display(), e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedEntry {
    pub source: String,
    pub entry: RawEntry,
}

pub fn parse_document(name: &str, text: &str) -> CoreResult<Vec<RawEntry>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(text).map_err(|e| CoreError::shape(name, e))
}

/// Load every named document in order and concatenate their entries.
pub fn load_corpus(reader: &dyn SourceReader, sources: &[String]) -> CoreResult<Vec<SourcedEntry>> {
    let mut out = Vec::new();
    for name in sources {
        let text = reader.read_source(name)?;
        let entries = parse_document(name, &text)?;
        info!(source = %name, entries = entries.len(), "loaded source document");
        out.extend(entries.into_iter().map(|entry| SourcedEntry {
            source: name.clone(),
            entry,
        }));
    }
    Ok(out)
}
