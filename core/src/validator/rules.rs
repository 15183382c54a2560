use serde::{Deserialize, Serialize};

/// Authoring rules enforced on the compiled corpus, in evaluation order.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rule {
    CATEGORY_COUNT,
    HYPHEN,
    APOSTROPHE,
    DUPLICATE_PHRASE,
}

impl Rule {
    pub const ALL: [Rule; 4] = [
        Rule::CATEGORY_COUNT,
        Rule::HYPHEN,
        Rule::APOSTROPHE,
        Rule::DUPLICATE_PHRASE,
    ];

    pub fn check_id(&self) -> &'static str {
        match self {
            Rule::CATEGORY_COUNT => "RULE.CATEGORY_COUNT",
            Rule::HYPHEN => "RULE.HYPHEN",
            Rule::APOSTROPHE => "RULE.APOSTROPHE",
            Rule::DUPLICATE_PHRASE => "RULE.DUPLICATE_PHRASE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::CATEGORY_COUNT => "entries not typed `simple` need at least two categories",
            Rule::HYPHEN => "inconsiderate phrases must not contain hyphens",
            Rule::APOSTROPHE => {
                "inconsiderate phrases must not contain apostrophes unless `apostrophe: true`"
            }
            Rule::DUPLICATE_PHRASE => "each inconsiderate phrase appears once in the corpus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_ids_are_unique_and_prefixed() {
        let ids: Vec<&str> = Rule::ALL.iter().map(|r| r.check_id()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(id.starts_with("RULE."));
            assert!(!ids[i + 1..].contains(id));
        }
    }
}
