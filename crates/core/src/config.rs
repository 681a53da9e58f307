//! Game configuration from environment variables.
//!
//! - `MEMORY_DIFFICULTY`: `easy` or `hard` (default: easy; unknown names fall back to easy)
//! - `MEMORY_EVAL_DELAY_MS`: how long a revealed pair stays visible before it is judged (default: 1000)
//! - `MEMORY_SEED`: fixed shuffle seed (default: random)
//! - `MEMORY_SCORES_PATH`: best-score JSON file (default: `.tui-memory-scores.json`)
//! - `MEMORY_LOG_PATH`: write logs to this file (default: logging disabled)

use std::path::PathBuf;

use crate::types::{Difficulty, EVAL_DELAY_MS};

pub const DEFAULT_SCORES_PATH: &str = ".tui-memory-scores.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub eval_delay_ms: u32,
    pub seed: Option<u32>,
    pub scores_path: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            eval_delay_ms: EVAL_DELAY_MS,
            seed: None,
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; invalid values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let difficulty = non_empty("MEMORY_DIFFICULTY")
            .map(|s| Difficulty::from_str_or_default(&s))
            .unwrap_or(defaults.difficulty);

        let eval_delay_ms = non_empty("MEMORY_EVAL_DELAY_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.eval_delay_ms);

        let seed = non_empty("MEMORY_SEED").and_then(|s| s.parse().ok());

        let scores_path = non_empty("MEMORY_SCORES_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.scores_path);

        let log_path = non_empty("MEMORY_LOG_PATH").map(PathBuf::from);

        Self {
            difficulty,
            eval_delay_ms,
            seed,
            scores_path,
            log_path,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_eval_delay_ms(mut self, eval_delay_ms: u32) -> Self {
        self.eval_delay_ms = eval_delay_ms;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.eval_delay_ms, 1000);
    }

    #[test]
    fn reads_all_variables() {
        let config = GameConfig::from_lookup(lookup(&[
            ("MEMORY_DIFFICULTY", "Hard"),
            ("MEMORY_EVAL_DELAY_MS", "250"),
            ("MEMORY_SEED", "42"),
            ("MEMORY_SCORES_PATH", "/tmp/scores.json"),
            ("MEMORY_LOG_PATH", "/tmp/memory.log"),
        ]));

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.eval_delay_ms, 250);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.scores_path, PathBuf::from("/tmp/scores.json"));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/memory.log")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            ("MEMORY_DIFFICULTY", "impossible"),
            ("MEMORY_EVAL_DELAY_MS", "-5"),
            ("MEMORY_SEED", "abc"),
            ("MEMORY_LOG_PATH", "   "),
        ]));

        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.eval_delay_ms, EVAL_DELAY_MS);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }
}
