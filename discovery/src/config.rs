use crate::error::DiscoveryError;
use crate::error::Result;
use icu_locale_core::Locale;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

/// Filter value that selects every record. Never a legal vocabulary entry.
pub const ALL_SENTINEL: &str = "all";

const DEFAULT_CATEGORIES: &[&str] = &[
    "Computer Science",
    "Engineering",
    "Mobile Development",
    "Web Development",
    "Data Science",
    "AI/ML",
    "Blockchain",
    "IoT",
    "AR/VR",
    "Design",
];

const DEFAULT_STATUSES: &[&str] = &["Ongoing", "Completed", "Archived", "Pending Approval"];

/// Newest first.
const DEFAULT_ACADEMIC_YEARS: &[&str] = &["2024-25", "2023-24", "2022-23", "2021-22", "2020-21"];

/// Closed value sets for the categorical record fields.
///
/// Order is significant: facet counts are reported in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Legal `department` values
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Legal `status` values
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,

    /// Legal `academicYear` values, reverse-chronological
    #[serde(default = "default_academic_years")]
    pub academic_years: Vec<String>,
}

fn default_categories() -> Vec<String> {
    to_owned_list(DEFAULT_CATEGORIES)
}

fn default_statuses() -> Vec<String> {
    to_owned_list(DEFAULT_STATUSES)
}

fn default_academic_years() -> Vec<String> {
    to_owned_list(DEFAULT_ACADEMIC_YEARS)
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            statuses: default_statuses(),
            academic_years: default_academic_years(),
        }
    }
}

impl Vocabulary {
    pub fn has_category(&self, value: &str) -> bool {
        self.categories.iter().any(|entry| entry == value)
    }

    pub fn has_status(&self, value: &str) -> bool {
        self.statuses.iter().any(|entry| entry == value)
    }

    pub fn has_academic_year(&self, value: &str) -> bool {
        self.academic_years.iter().any(|entry| entry == value)
    }

    pub fn validate(&self) -> Result<()> {
        validate_list("category", &self.categories)?;
        validate_list("status", &self.statuses)?;
        validate_list("academic year", &self.academic_years)
    }
}

fn validate_list(field: &'static str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(DiscoveryError::EmptyVocabulary { field });
    }
    let mut seen = HashSet::new();
    for value in values {
        if value.trim().is_empty() {
            return Err(DiscoveryError::BlankVocabularyEntry { field });
        }
        if value == ALL_SENTINEL {
            return Err(DiscoveryError::ReservedVocabularyEntry { field });
        }
        if !seen.insert(value.as_str()) {
            return Err(DiscoveryError::DuplicateVocabularyEntry {
                field,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Configuration for the discovery engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Category, status and academic-year vocabularies
    #[serde(default)]
    pub vocabulary: Vocabulary,

    /// BCP-47 locale used to collate titles
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            locale: default_locale(),
        }
    }
}

impl DiscoveryConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.vocabulary.validate()?;
        self.parsed_locale().map(|_| ())
    }

    pub fn parsed_locale(&self) -> Result<Locale> {
        let raw = self.locale.trim();
        if raw.is_empty() {
            return Err(DiscoveryError::InvalidLocale {
                locale: self.locale.clone(),
                reason: "locale must not be blank".to_string(),
            });
        }
        raw.parse::<Locale>()
            .map_err(|err| DiscoveryError::InvalidLocale {
                locale: self.locale.clone(),
                reason: err.to_string(),
            })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
