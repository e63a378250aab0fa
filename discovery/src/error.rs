use thiserror::Error;

/// Errors raised while building or loading discovery configuration.
///
/// The browse pipeline itself never fails; every variant here describes a
/// configuration the engine refuses to start with.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("{field} vocabulary must not be empty")]
    EmptyVocabulary { field: &'static str },

    #[error("{field} vocabulary contains a blank entry")]
    BlankVocabularyEntry { field: &'static str },

    #[error("{field} vocabulary lists \"{value}\" more than once")]
    DuplicateVocabularyEntry { field: &'static str, value: String },

    #[error("\"all\" is reserved and cannot be a {field} vocabulary entry")]
    ReservedVocabularyEntry { field: &'static str },

    #[error("Invalid locale \"{locale}\": {reason}")]
    InvalidLocale { locale: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
