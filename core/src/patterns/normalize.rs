use crate::patterns::model::{
    NormalizedEntry, PhraseField, PhraseMap, RawEntry, SENTINEL_CATEGORY,
};

/// Coerce an authored phrase field into a phrase -> category map.
///
/// A bare phrase or a list maps every phrase to [`SENTINEL_CATEGORY`]; a map is
/// passed through as authored.
pub fn clean_phrase_field(field: PhraseField) -> PhraseMap {
    let phrases = match field {
        PhraseField::Map(map) => return map,
        PhraseField::Phrase(phrase) => vec![phrase],
        PhraseField::List(list) => list,
    };
    phrases
        .into_iter()
        .map(|p| (p, SENTINEL_CATEGORY.to_string()))
        .collect()
}

/// Distinct category values in first-occurrence order.
pub fn derive_categories(inconsiderate: &PhraseMap) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for category in inconsiderate.values() {
        if !out.contains(category) {
            out.push(category.clone());
        }
    }
    out
}

pub fn normalize(raw: RawEntry) -> NormalizedEntry {
    let inconsiderate = clean_phrase_field(raw.inconsiderate);
    let considerate = clean_phrase_field(raw.considerate);
    let categories = derive_categories(&inconsiderate);
    NormalizedEntry {
        kind: raw.kind,
        note: raw.note,
        source: raw.source,
        apostrophe: raw.apostrophe,
        categories,
        inconsiderate,
        considerate,
    }
}
