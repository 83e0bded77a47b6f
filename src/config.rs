use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hospital: HospitalConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HospitalConfig {
    pub name: String,
    /// Replay the scripted demonstration scenario at startup.
    pub seed_demo: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HospitalConfig {
    fn default() -> Self {
        HospitalConfig {
            name: "General Hospital".to_string(),
            seed_demo: true,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hospital: HospitalConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Failed to read config file: {}", err),
            ConfigError::Parse(err) => write!(f, "Failed to parse config file: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    serde_yaml::from_str(&contents).map_err(ConfigError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.hospital.name, "General Hospital");
        assert!(config.hospital.seed_demo);
    }

    #[test]
    fn test_parse_partial_yaml_falls_back_to_defaults() {
        let config: Config = serde_yaml::from_str("api:\n  host: 0.0.0.0\n  port: 8080\n").unwrap();
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.hospital.name, "General Hospital");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("definitely-not-here.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
