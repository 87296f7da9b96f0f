use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

const GERMANY_KEY: &str = "germany";
const UNITED_KINGDOM_KEY: &str = "united kingdom";
const UNITED_ARAB_EMIRATES_KEY: &str = "united arab emirates";
const UNKNOWN_KEY: &str = "unknown";

/// Canonical jurisdiction a free-text country or city resolves to.
///
/// Serialized as its lookup key so rule tables can be keyed by it in JSON.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Jurisdiction {
    Germany,
    UnitedKingdom,
    UnitedArabEmirates,
    /// Cleaned input with no matching alias. Carries no rules.
    Unsupported(String),
    /// Missing or blank input.
    Unknown,
}

impl Jurisdiction {
    /// Resolve a canonical key. Non-canonical text becomes `Unsupported`.
    pub fn from_key(key: &str) -> Self {
        let cleaned = key.trim().to_lowercase();
        match cleaned.as_str() {
            "" | UNKNOWN_KEY => Self::Unknown,
            GERMANY_KEY => Self::Germany,
            UNITED_KINGDOM_KEY => Self::UnitedKingdom,
            UNITED_ARAB_EMIRATES_KEY => Self::UnitedArabEmirates,
            _ => Self::Unsupported(cleaned),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Jurisdiction::Germany => GERMANY_KEY,
            Jurisdiction::UnitedKingdom => UNITED_KINGDOM_KEY,
            Jurisdiction::UnitedArabEmirates => UNITED_ARAB_EMIRATES_KEY,
            Jurisdiction::Unsupported(raw) => raw,
            Jurisdiction::Unknown => UNKNOWN_KEY,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Jurisdiction::Germany => "Germany".to_string(),
            Jurisdiction::UnitedKingdom => "United Kingdom".to_string(),
            Jurisdiction::UnitedArabEmirates => "United Arab Emirates".to_string(),
            Jurisdiction::Unsupported(raw) => title_case(raw),
            Jurisdiction::Unknown => "Unknown".to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Jurisdiction::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Jurisdiction::Unsupported(_) | Jurisdiction::Unknown)
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<String> for Jurisdiction {
    fn from(value: String) -> Self {
        Self::from_key(&value)
    }
}

impl From<Jurisdiction> for String {
    fn from(value: Jurisdiction) -> Self {
        value.key().to_string()
    }
}

fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const STANDARD_ALIASES: &[(&str, &str)] = &[
    ("uae", UNITED_ARAB_EMIRATES_KEY),
    ("u.a.e.", UNITED_ARAB_EMIRATES_KEY),
    ("dubai", UNITED_ARAB_EMIRATES_KEY),
    ("abu dhabi", UNITED_ARAB_EMIRATES_KEY),
    ("abudhabi", UNITED_ARAB_EMIRATES_KEY),
    ("uk", UNITED_KINGDOM_KEY),
    ("britain", UNITED_KINGDOM_KEY),
    ("great britain", UNITED_KINGDOM_KEY),
    ("england", UNITED_KINGDOM_KEY),
    ("london", UNITED_KINGDOM_KEY),
    ("de", GERMANY_KEY),
    ("deutschland", GERMANY_KEY),
    ("berlin", GERMANY_KEY),
    ("munich", GERMANY_KEY),
];

/// Closed alias table mapping country and city spellings to jurisdictions.
///
/// Matching is exact on the lowercased, trimmed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Jurisdiction>",
    into = "BTreeMap<String, Jurisdiction>"
)]
pub struct CountryNormalizer {
    aliases: BTreeMap<String, Jurisdiction>,
}

impl CountryNormalizer {
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (S, Jurisdiction)>,
        S: AsRef<str>,
    {
        let aliases = aliases
            .into_iter()
            .map(|(alias, jurisdiction)| (alias.as_ref().trim().to_lowercase(), jurisdiction))
            .collect();
        Self { aliases }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_ALIASES
                .iter()
                .map(|(alias, key)| (*alias, Jurisdiction::from_key(key))),
        )
    }

    /// Total: every input resolves to some jurisdiction.
    pub fn normalize(&self, raw: Option<&str>) -> Jurisdiction {
        let Some(raw) = raw else {
            return Jurisdiction::Unknown;
        };

        let cleaned = raw.trim().to_lowercase();
        match self.aliases.get(&cleaned) {
            Some(jurisdiction) => jurisdiction.clone(),
            None => Jurisdiction::from_key(&cleaned),
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for CountryNormalizer {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<BTreeMap<String, Jurisdiction>> for CountryNormalizer {
    fn from(value: BTreeMap<String, Jurisdiction>) -> Self {
        Self::new(value)
    }
}

impl From<CountryNormalizer> for BTreeMap<String, Jurisdiction> {
    fn from(value: CountryNormalizer) -> Self {
        value.aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uae_spellings_collapse_to_one_key() {
        let normalizer = CountryNormalizer::standard();
        for raw in ["UAE", "Dubai", "U.A.E.", "  united arab emirates ", "Abu Dhabi"] {
            let jurisdiction = normalizer.normalize(Some(raw));
            assert_eq!(jurisdiction, Jurisdiction::UnitedArabEmirates, "input {raw}");
            assert_eq!(jurisdiction.key(), "united arab emirates");
        }
    }

    #[test]
    fn city_aliases_resolve_to_countries() {
        let normalizer = CountryNormalizer::standard();
        assert_eq!(normalizer.normalize(Some("London")), Jurisdiction::UnitedKingdom);
        assert_eq!(normalizer.normalize(Some("Berlin")), Jurisdiction::Germany);
        assert_eq!(normalizer.normalize(Some("Deutschland")), Jurisdiction::Germany);
    }

    #[test]
    fn missing_or_blank_input_is_unknown() {
        let normalizer = CountryNormalizer::standard();
        assert_eq!(normalizer.normalize(None), Jurisdiction::Unknown);
        assert_eq!(normalizer.normalize(Some("")), Jurisdiction::Unknown);
        assert_eq!(normalizer.normalize(Some("   ")), Jurisdiction::Unknown);
        assert_eq!(normalizer.normalize(Some("Unknown")), Jurisdiction::Unknown);
    }

    #[test]
    fn unmatched_input_passes_through_as_unsupported() {
        let normalizer = CountryNormalizer::standard();
        let jurisdiction = normalizer.normalize(Some("  France "));
        assert_eq!(jurisdiction, Jurisdiction::Unsupported("france".to_string()));
        assert_eq!(jurisdiction.key(), "france");
        assert!(!jurisdiction.is_supported());
    }

    #[test]
    fn no_substring_matching() {
        let normalizer = CountryNormalizer::standard();
        assert_eq!(
            normalizer.normalize(Some("Dubai Marina")),
            Jurisdiction::Unsupported("dubai marina".to_string())
        );
    }

    #[test]
    fn serializes_as_key() {
        let encoded = serde_json::to_string(&Jurisdiction::UnitedKingdom).expect("encodes");
        assert_eq!(encoded, "\"united kingdom\"");
        let decoded: Jurisdiction = serde_json::from_str("\"Germany\"").expect("decodes");
        assert_eq!(decoded, Jurisdiction::Germany);
    }

    #[test]
    fn unsupported_display_name_is_title_cased() {
        let jurisdiction = Jurisdiction::Unsupported("new zealand".to_string());
        assert_eq!(jurisdiction.display_name(), "New Zealand");
    }
}
