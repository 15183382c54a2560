use patterns_core::error::CoreError;
use patterns_core::loader::parse_document;
use patterns_core::pipeline::compile_entries;
use patterns_core::validator::rules::Rule;
use patterns_core::validator::ValidationError;

fn compile_yaml(yaml: &str) -> Result<usize, ValidationError> {
    let raw = parse_document("test", yaml).unwrap();
    match compile_entries(raw) {
        Ok(entries) => Ok(entries.len()),
        Err(CoreError::Validation(v)) => Err(v),
        Err(other) => panic!("unexpected error: {}", other),
    }
}

const VALID: &str = r#"
- type: or
  considerate:
    their: a
  inconsiderate:
    her: female
    his: male
- type: simple
  considerate: [fine]
  inconsiderate: [bonkers]
"#;

#[test]
fn valid_corpus_compiles() {
    assert_eq!(compile_yaml(VALID).unwrap(), 2);
}

#[test]
fn single_category_without_simple_type_fails_whole_run() {
    let yaml = format!(
        "{}\n- considerate: y\n  inconsiderate:\n    x: a\n",
        VALID.trim_end()
    );
    let err = compile_yaml(&yaml).unwrap_err();
    assert_eq!(err.rule(), Rule::CATEGORY_COUNT);
    assert!(err.to_string().contains("type: simple"));
    assert!(err.to_string().ends_with(": x"));
}

#[test]
fn hyphenated_phrase_fails_and_names_entry_phrases() {
    let yaml = r#"
- type: simple
  considerate: [word]
  inconsiderate: [plain, some-word]
"#;
    let err = compile_yaml(yaml).unwrap_err();
    assert_eq!(err.rule(), Rule::HYPHEN);
    assert_eq!(err.phrases(), ["plain".to_string(), "some-word".to_string()]);
    assert!(err.to_string().contains("plain, some-word"));
}

#[test]
fn apostrophe_requires_flag() {
    let without = r#"
- type: simple
  considerate: [do not]
  inconsiderate: ["don't"]
"#;
    let err = compile_yaml(without).unwrap_err();
    assert_eq!(err.rule(), Rule::APOSTROPHE);
    assert!(err.to_string().contains("apostrophe: true"));

    let with = r#"
- type: simple
  apostrophe: true
  considerate: [do not]
  inconsiderate: ["don't"]
"#;
    assert_eq!(compile_yaml(with).unwrap(), 1);
}

#[test]
fn apostrophe_false_is_not_a_permission() {
    let yaml = r#"
- type: simple
  apostrophe: false
  considerate: [do not]
  inconsiderate: ["don’t"]
"#;
    assert_eq!(compile_yaml(yaml).unwrap_err().rule(), Rule::APOSTROPHE);
}

#[test]
fn duplicate_phrase_across_entries_fails() {
    let yaml = r#"
- type: simple
  considerate: [fine]
  inconsiderate: [crazy]
- type: simple
  considerate: [wild]
  inconsiderate: [crazy, insane]
"#;
    let err = compile_yaml(yaml).unwrap_err();
    assert_eq!(err.rule(), Rule::DUPLICATE_PHRASE);
    assert_eq!(err.phrases(), ["crazy".to_string()]);
    assert!(err.to_string().contains("crazy"));
}

#[test]
fn per_entry_rules_are_reported_before_duplicates() {
    let yaml = r#"
- type: simple
  considerate: [fine]
  inconsiderate: [crazy]
- type: simple
  considerate: [x]
  inconsiderate: [well-known]
- type: simple
  considerate: [wild]
  inconsiderate: [crazy]
"#;
    assert_eq!(compile_yaml(yaml).unwrap_err().rule(), Rule::HYPHEN);
}
