use anyhow::{Context, Result, anyhow};

pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;
const DEFAULT_LOG_DIR: &str = "/var/log/app";
const DEV_LOG_DIR: &str = "./logs";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub is_dev: bool,
    pub log_dir: String,
    pub generator: GeneratorConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port_str = std::env::var("PORT").context("Missing env: PORT")?;
        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let is_dev = match std::env::var("DEV_MODE") {
            Ok(value) => parse_flag("DEV_MODE", &value)?,
            Err(_) => false,
        };

        let log_dir = match std::env::var("LOG_DIR") {
            Ok(dir) if !dir.trim().is_empty() => dir,
            _ if is_dev => DEV_LOG_DIR.to_string(),
            _ => DEFAULT_LOG_DIR.to_string(),
        };

        Ok(Self {
            port,
            is_dev,
            log_dir,
            generator: GeneratorConfig::from_env()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub max_batch_size: usize,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var("MAX_BATCH_SIZE").ok().as_deref(),
            std::env::var("GENERATOR_SEED").ok().as_deref(),
        )
    }

    pub fn from_values(max_batch_size: Option<&str>, seed: Option<&str>) -> Result<Self> {
        let max_batch_size = match max_batch_size.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => {
                let value = raw
                    .parse::<usize>()
                    .context("MAX_BATCH_SIZE must be a valid usize integer")?;
                if value == 0 {
                    return Err(anyhow!("MAX_BATCH_SIZE must be at least 1"));
                }
                value
            }
            None => DEFAULT_MAX_BATCH_SIZE,
        };

        let seed = seed
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|raw| {
                raw.parse::<u64>()
                    .context("GENERATOR_SEED must be a valid u64 integer")
            })
            .transpose()?;

        Ok(Self {
            max_batch_size,
            seed,
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = GeneratorConfig::from_values(None, None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn parses_batch_size_and_seed() {
        let config = GeneratorConfig::from_values(Some("50"), Some("42")).unwrap();
        assert_eq!(config.max_batch_size, 50);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(GeneratorConfig::from_values(Some("0"), None).is_err());
        assert!(GeneratorConfig::from_values(Some("many"), None).is_err());
        assert!(GeneratorConfig::from_values(None, Some("-1")).is_err());
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("DEV_MODE", "1").unwrap());
        assert!(!parse_flag("DEV_MODE", "false").unwrap());
        assert!(parse_flag("DEV_MODE", "yes").is_err());
    }
}
