use crate::config::PipelineConfig;
use crate::determinism::artifact_json::render_artifact_json;
use crate::determinism::fingerprint::sha256_hex;
use crate::error::CoreResult;
use crate::loader::{load_corpus, DirectoryReader, SourceReader};
use crate::patterns::assemble::assemble;
use crate::patterns::model::{OutputEntry, RawEntry};
use crate::patterns::normalize::normalize;
use crate::report::BuildSummary;
use crate::validator::validate;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct CompiledArtifact {
    pub entries: Vec<OutputEntry>,
    pub bytes: Vec<u8>,
    pub sha256: String,
    pub summary: BuildSummary,
}

/// Normalize and assemble every record, then validate the corpus as a whole.
pub fn compile_entries(raw: Vec<RawEntry>) -> CoreResult<Vec<OutputEntry>> {
    let entries: Vec<OutputEntry> = raw
        .into_iter()
        .map(|r| assemble(normalize(r)))
        .collect();
    for e in &entries {
        debug!(id = %e.id, categories = e.categories.len(), "assembled entry");
    }
    validate(&entries)?;
    Ok(entries)
}

pub fn compile(config: &PipelineConfig, reader: &dyn SourceReader) -> CoreResult<CompiledArtifact> {
    let corpus = load_corpus(reader, &config.sources)?;
    let (origins, raw): (Vec<String>, Vec<RawEntry>) =
        corpus.into_iter().map(|s| (s.source, s.entry)).unzip();

    let entries = compile_entries(raw)?;
    let bytes = render_artifact_json(&entries)?;
    let sha256 = sha256_hex(&bytes);
    let summary = BuildSummary::collect(&config.sources, &origins, &entries, &sha256);
    for c in &summary.id_collisions {
        warn!(id = %c.id, entries = c.entries, "pattern id shared by several entries");
    }

    Ok(CompiledArtifact {
        entries,
        bytes,
        sha256,
        summary,
    })
}

pub fn write_artifact(path: &Path, bytes: &[u8]) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Compile from `config.data_dir` and write `config.output_path`.
///
/// Nothing is written unless the whole corpus compiles.
pub fn run(config: &PipelineConfig) -> CoreResult<CompiledArtifact> {
    config.validate()?;
    let reader = DirectoryReader::new(&config.data_dir);
    let artifact = compile(config, &reader)?;
    write_artifact(&config.output_path, &artifact.bytes)?;
    info!(
        path = %config.output_path.display(),
        entries = artifact.entries.len(),
        sha256 = %artifact.sha256,
        "wrote patterns artifact"
    );
    Ok(artifact)
}
