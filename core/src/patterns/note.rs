/// Fold an optional citation into the free-text note.
///
/// Empty strings count as absent.
pub fn compile_note(note: Option<&str>, source: Option<&str>) -> Option<String> {
    let source = source.filter(|s| !s.is_empty());
    match (note.filter(|n| !n.is_empty()), source) {
        (Some(n), Some(s)) => Some(format!("{} (source: {})", n, s)),
        (None, Some(s)) => Some(format!("Source: {}", s)),
        (_, None) => note.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_and_source_are_merged() {
        assert_eq!(
            compile_note(Some("X"), Some("Y")).as_deref(),
            Some("X (source: Y)")
        );
        assert_eq!(compile_note(None, Some("Y")).as_deref(), Some("Source: Y"));
        assert_eq!(compile_note(Some("X"), None).as_deref(), Some("X"));
        assert_eq!(compile_note(None, None), None);
    }

    #[test]
    fn empty_note_with_source_uses_source_only() {
        assert_eq!(compile_note(Some(""), Some("Y")).as_deref(), Some("Source: Y"));
    }
}
