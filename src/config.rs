//! Runtime configuration from environment and command-line flags.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use crate::persistence::default_data_dir;

pub const ENV_DATA_DIR: &str = "GACHA_DATA_DIR";
pub const ENV_CONTENT_DIR: &str = "GACHA_CONTENT_DIR";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Profile directory (wallet, roster, summon history).
    pub data_dir: PathBuf,
    /// Directory holding the content JSON files.
    pub content_dir: PathBuf,
    /// RNG seed for reproducible runs (None = entropy).
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().unwrap_or_else(|_| PathBuf::from(".gacha")),
            content_dir: PathBuf::from("content"),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults, overridden by environment, overridden by flags.
    ///
    /// Recognized flags are consumed; everything else is returned in order
    /// as the command and its arguments.
    pub fn from_env_and_args<E, I>(env: E, args: I) -> Result<(Self, Vec<String>), ConfigError>
    where
        E: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        if let Some(dir) = env(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env(ENV_CONTENT_DIR) {
            config.content_dir = PathBuf::from(dir);
        }

        let mut rest = Vec::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--data-dir"))?;
                    config.data_dir = PathBuf::from(value);
                }
                "--content-dir" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue("--content-dir"))?;
                    config.content_dir = PathBuf::from(value);
                }
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    let seed = value.parse::<u64>().map_err(|_| ConfigError::InvalidSeed(value))?;
                    config.seed = Some(seed);
                }
                _ => rest.push(arg),
            }
        }
        Ok((config, rest))
    }

    pub fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_flags_consumed_and_rest_returned() {
        let (config, rest) = GameConfig::from_env_and_args(
            no_env,
            args(&["--seed", "9", "battle", "--data-dir", "/tmp/p", "--event"]),
        )
        .unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/p"));
        assert_eq!(rest, args(&["battle", "--event"]));
    }

    #[test]
    fn test_env_overridden_by_flag() {
        let env = |key: &str| match key {
            ENV_DATA_DIR => Some("/env/data".to_string()),
            ENV_CONTENT_DIR => Some("/env/content".to_string()),
            _ => None,
        };
        let (config, _) =
            GameConfig::from_env_and_args(env, args(&["--content-dir", "/flag"])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/env/data"));
        assert_eq!(config.content_dir, PathBuf::from("/flag"));
    }

    #[test]
    fn test_bad_flags() {
        assert_eq!(
            GameConfig::from_env_and_args(no_env, args(&["--seed"])).unwrap_err(),
            ConfigError::MissingValue("--seed")
        );
        assert_eq!(
            GameConfig::from_env_and_args(no_env, args(&["--seed", "x"])).unwrap_err(),
            ConfigError::InvalidSeed("x".to_string())
        );
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(3),
            ..Default::default()
        };
        let a: u64 = config.make_rng().gen();
        let b: u64 = config.make_rng().gen();
        assert_eq!(a, b);
    }
}
