use crate::patterns::model::{NormalizedEntry, OutputEntry};
use crate::patterns::note::compile_note;
use crate::patterns::pattern_id::compute_pattern_id;

pub fn assemble(entry: NormalizedEntry) -> OutputEntry {
    let note = compile_note(entry.note.as_deref(), entry.source.as_deref());
    let id = compute_pattern_id(&entry.inconsiderate);
    OutputEntry {
        id,
        kind: entry.kind,
        apostrophe: entry.apostrophe.filter(|a| *a),
        categories: entry.categories,
        considerate: entry.considerate,
        inconsiderate: entry.inconsiderate,
        note,
    }
}
