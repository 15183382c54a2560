use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Category assigned to phrases authored without an explicit category.
pub const SENTINEL_CATEGORY: &str = "a";

/// Phrase -> category, in authored order.
pub type PhraseMap = IndexMap<String, String>;

/// The three shapes a phrase field may be authored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseField {
    Phrase(String),
    List(Vec<String>),
    Map(PhraseMap),
}

struct PhraseFieldVisitor;

impl<'de> Visitor<'de> for PhraseFieldVisitor {
    type Value = PhraseField;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a phrase, a list of phrases, or a phrase -> category mapping")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PhraseField, E> {
        Ok(PhraseField::Phrase(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<PhraseField, E> {
        Ok(PhraseField::Phrase(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PhraseField, A::Error> {
        let mut list = Vec::new();
        while let Some(phrase) = seq.next_element::<String>()? {
            list.push(phrase);
        }
        Ok(PhraseField::List(list))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PhraseField, A::Error> {
        let mut map = PhraseMap::new();
        while let Some((phrase, category)) = access.next_entry::<String, String>()? {
            if map.contains_key(&phrase) {
                return Err(de::Error::custom(format!("phrase `{}` listed twice", phrase)));
            }
            map.insert(phrase, category);
        }
        Ok(PhraseField::Map(map))
    }
}

impl<'de> Deserialize<'de> for PhraseField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PhraseFieldVisitor)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawEntry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub apostrophe: Option<bool>,
    pub inconsiderate: PhraseField,
    pub considerate: PhraseField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub kind: Option<String>,
    pub note: Option<String>,
    pub source: Option<String>,
    pub apostrophe: Option<bool>,
    pub categories: Vec<String>,
    pub inconsiderate: PhraseMap,
    pub considerate: PhraseMap,
}

/// One record of `patterns.json`. Field order is the serialized order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutputEntry {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apostrophe: Option<bool>, // only ever Some(true)
    pub categories: Vec<String>,
    pub considerate: PhraseMap,
    pub inconsiderate: PhraseMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OutputEntry {
    pub fn is_simple(&self) -> bool {
        self.kind.as_deref() == Some("simple")
    }

    pub fn allows_apostrophe(&self) -> bool {
        self.apostrophe == Some(true)
    }

    pub fn inconsiderate_phrases(&self) -> Vec<&str> {
        self.inconsiderate.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_field_accepts_all_three_shapes() {
        let s: PhraseField = serde_yaml::from_str("crazy").unwrap();
        assert_eq!(s, PhraseField::Phrase("crazy".to_string()));

        let l: PhraseField = serde_yaml::from_str("[crazy, insane]").unwrap();
        assert_eq!(
            l,
            PhraseField::List(vec!["crazy".to_string(), "insane".to_string()])
        );

        let m: PhraseField = serde_yaml::from_str("{her: female, him: male}").unwrap();
        match m {
            PhraseField::Map(map) => {
                assert_eq!(map.keys().collect::<Vec<_>>(), vec!["her", "him"]);
            }
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn repeated_mapping_key_is_rejected() {
        let err = serde_yaml::from_str::<PhraseField>("{her: female, her: male, him: male}")
            .unwrap_err();
        assert!(err.to_string().contains("her"), "{}", err);
    }

    #[test]
    fn wrong_shape_names_the_accepted_forms() {
        let err = serde_yaml::from_str::<PhraseField>("404").unwrap_err();
        assert!(err.to_string().contains("a phrase, a list of phrases"), "{}", err);

        let err = serde_yaml::from_str::<PhraseField>("[404]").unwrap_err();
        assert!(err.to_string().contains("expected a string"), "{}", err);
    }

    #[test]
    fn output_entry_skips_absent_optionals() {
        let e = OutputEntry {
            id: "x".to_string(),
            kind: None,
            apostrophe: None,
            categories: vec!["a".to_string()],
            considerate: PhraseMap::new(),
            inconsiderate: PhraseMap::new(),
            note: None,
        };
        let v = serde_json::to_value(&e).unwrap();
        assert!(v.get("type").is_none());
        assert!(v.get("apostrophe").is_none());
        assert!(v.get("note").is_none());
    }
}
