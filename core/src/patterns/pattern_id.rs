use crate::patterns::model::PhraseMap;
use indexmap::IndexMap;

/// Derive the readable pattern id of an entry from its inconsiderate phrases.
///
/// The shortest phrase of each category (first one wins on ties) is turned into a
/// fragment by hyphenating its first whitespace character; fragments are sorted
/// and joined with `-`. Ids are stable across rebuilds but not unique by
/// construction.
pub fn compute_pattern_id(inconsiderate: &PhraseMap) -> String {
    let mut representatives: IndexMap<&str, &str> = IndexMap::new();
    for (phrase, category) in inconsiderate {
        match representatives.get(category.as_str()) {
            Some(current) if current.chars().count() <= phrase.chars().count() => {}
            _ => {
                representatives.insert(category.as_str(), phrase.as_str());
            }
        }
    }

    let mut fragments: Vec<String> = representatives
        .values()
        .map(|phrase| hyphenate_first_whitespace(phrase))
        .collect();
    fragments.sort();
    fragments.join("-")
}

fn hyphenate_first_whitespace(phrase: &str) -> String {
    let mut out = phrase.to_string();
    if let Some((idx, ch)) = phrase.char_indices().find(|(_, c)| c.is_whitespace()) {
        out.replace_range(idx..idx + ch.len_utf8(), "-");
    }
    out
}
