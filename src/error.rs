use thiserror::Error;

/// Rejected engine configuration. Raised synchronously by `start()` before any
/// worker exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("alphabet contains '{0}' more than once")]
    DuplicateCharacter(char),

    #[error("population size must be at least 2 (got {0})")]
    PopulationTooSmall(usize),

    #[error("generation count must be greater than zero")]
    NoGenerations,

    #[error("mutation rate must lie in [0, 1] (got {0})")]
    InvalidMutationRate(f64),

    #[error("alphabet has {alphabet} characters but the keyboard has {keys} keys")]
    AlphabetSizeMismatch { alphabet: usize, keys: usize },
}

#[derive(Error, Debug)]
pub enum KeyEvolveError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    #[error("Keyboard geometry cannot be edited while a search is running")]
    GeometryLocked,

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type KeResult<T> = Result<T, KeyEvolveError>;
