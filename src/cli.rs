use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigOverrides};

/// Search movies on OMDb and keep a rated watchlist.
#[derive(Debug, Parser)]
#[command(name = "frate", version, about)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/frate/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the OMDb base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Log filter directive (e.g. "debug", "frate=trace")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Start with this search query
    pub query: Option<String>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            log_level: self.log_level.clone(),
        }
    }

    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut Config) {
        self.overrides().apply(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_file_values() {
        let cli = Cli::parse_from([
            "frate",
            "--api-key",
            "k123",
            "--base-url",
            "http://localhost:9999/",
            "--log-level",
            "debug",
            "inception",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.api.api_key.as_deref(), Some("k123"));
        assert_eq!(config.api.base_url, "http://localhost:9999/");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(cli.query.as_deref(), Some("inception"));
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let cli = Cli::parse_from(["frate", "--config", "/tmp/frate.toml"]);
        let mut config = Config::default();
        config.api.api_key = Some("from-file".to_string());
        let before = config.clone();
        cli.apply(&mut config);

        assert_eq!(config, before);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/frate.toml"));
    }
}
