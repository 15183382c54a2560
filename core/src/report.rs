use crate::patterns::model::OutputEntry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceCount {
    pub source: String,
    pub entries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdCollision {
    pub id: String,
    pub entries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildSummary {
    pub total_entries: usize,
    pub sources: Vec<SourceCount>,
    pub simple_entries: usize,
    pub multi_category_entries: usize,
    pub inconsiderate_phrases: usize,
    pub considerate_phrases: usize,
    pub id_collisions: Vec<IdCollision>,
    pub sha256: String,
}

impl BuildSummary {
    /// `origins[i]` names the source document of `entries[i]`; `source_order`
    /// lists every configured document so empty ones still show up.
    pub fn collect(
        source_order: &[String],
        origins: &[String],
        entries: &[OutputEntry],
        sha256: &str,
    ) -> Self {
        let mut per_source: IndexMap<&str, usize> =
            source_order.iter().map(|s| (s.as_str(), 0)).collect();
        for origin in origins {
            *per_source.entry(origin.as_str()).or_insert(0) += 1;
        }

        let simple_entries = entries.iter().filter(|e| e.is_simple()).count();
        Self {
            total_entries: entries.len(),
            sources: per_source
                .into_iter()
                .map(|(source, entries)| SourceCount {
                    source: source.to_string(),
                    entries,
                })
                .collect(),
            simple_entries,
            multi_category_entries: entries.len() - simple_entries,
            inconsiderate_phrases: entries.iter().map(|e| e.inconsiderate.len()).sum(),
            considerate_phrases: entries.iter().map(|e| e.considerate.len()).sum(),
            id_collisions: id_collisions(entries),
            sha256: sha256.to_string(),
        }
    }

    pub fn one_line(&self) -> String {
        let per_source: Vec<String> = self
            .sources
            .iter()
            .map(|s| format!("{}={}", s.source, s.entries))
            .collect();
        format!(
            "PATTERNS entries={} simple={} multi={} phrases={} id_collisions={} sha256={} [{}]",
            self.total_entries,
            self.simple_entries,
            self.multi_category_entries,
            self.inconsiderate_phrases,
            self.id_collisions.len(),
            self.sha256,
            per_source.join(" ")
        )
    }
}

/// Pattern ids shared by more than one entry, in first-occurrence order.
pub fn id_collisions(entries: &[OutputEntry]) -> Vec<IdCollision> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for e in entries {
        *counts.entry(e.id.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(id, entries)| IdCollision {
            id: id.to_string(),
            entries,
        })
        .collect()
}
