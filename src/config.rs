use crate::error::{ConfigError, KeResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz.,;/";

/// Engine configuration supplied to `start()`.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Characters to place, one per key
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    #[arg(short = 'p', long, default_value_t = 100)]
    pub population_size: usize,

    #[arg(short = 'g', long, default_value_t = 1000)]
    pub generations: usize,

    /// Per-position swap probability
    #[arg(short = 'm', long, default_value_t = 0.1)]
    pub mutation_rate: f64,

    /// Seeds this run instead of forking the engine RNG
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Pause after each generation; also the cancellation granularity
    #[arg(long, default_value_t = 10)]
    pub generation_delay_ms: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            population_size: 100,
            generations: 1000,
            mutation_rate: 0.1,
            seed: None,
            generation_delay_ms: 10,
        }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KeResult<Self> {
        let content = fs::read_to_string(path)?;
        let params = serde_json::from_str(&content)?;
        Ok(params)
    }

    pub fn alphabet_chars(&self) -> Vec<char> {
        self.alphabet.chars().collect()
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    /// Checks everything `start()` must reject before spawning a worker.
    pub fn validate(&self, key_count: usize) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let mut seen = HashSet::new();
        for c in self.alphabet.chars() {
            if !seen.insert(c) {
                return Err(ConfigError::DuplicateCharacter(c));
            }
        }

        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        // Written so that NaN fails too.
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }

        let alphabet_len = seen.len();
        if alphabet_len != key_count {
            return Err(ConfigError::AlphabetSizeMismatch {
                alphabet: alphabet_len,
                keys: key_count,
            });
        }

        Ok(())
    }
}
