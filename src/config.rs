use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use serde_yaml;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Runs the bookshelf service", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long)]
    pub debug: bool,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bookshelf")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    #[serde(default = "default_database")]
    database: String,
    #[serde(default = "default_port")]
    port: u16,
}

fn default_database() -> String {
    "books.db".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for App {
    fn default() -> Self {
        App {
            database: default_database(),
            port: default_port(),
        }
    }
}

impl App {
    pub fn get_db(&self) -> &str {
        &self.database
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: App,
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let cfg = Config::load_config(path)?;
        Ok(cfg)
    }

    fn load_config(path: &str) -> Result<Config> {
        let yaml_str = fs::read_to_string(path)?;
        Config::from_yaml(&yaml_str)
    }

    pub fn from_yaml(yaml_str: &str) -> Result<Config> {
        let yaml_with_env = Config::substitute_env_vars(yaml_str)?;
        let config: Config = serde_yaml::from_str(&yaml_with_env)?;
        Ok(config)
    }

    fn substitute_env_vars(yaml_str: &str) -> Result<String> {
        let mut result = yaml_str.to_string();
        let mut offset = 0;

        while let Some(start) = result[offset..].find("${") {
            let actual_start = offset + start;
            if let Some(end) = result[actual_start..].find("}") {
                let var_name = &result[actual_start + 2..actual_start + end];

                // ${VAR:-default}
                let env_value = if let Some(default_start) = var_name.find(":-") {
                    let actual_var = &var_name[..default_start];
                    let default_val = &var_name[default_start + 2..];
                    env::var(actual_var).unwrap_or_else(|_| default_val.to_string())
                } else {
                    env::var(var_name).unwrap_or_else(|_| {
                        tracing::warn!("environment variable '{}' not found", var_name);
                        String::new()
                    })
                };

                result.replace_range(actual_start..actual_start + end + 1, &env_value);
                offset = actual_start + env_value.len();
            } else {
                break;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_app_section() {
        let cfg = Config::from_yaml("app:\n  database: library.db\n  port: 8080\n").unwrap();
        assert_eq!(cfg.app.get_db(), "library.db");
        assert_eq!(cfg.app.get_port(), 8080);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = Config::from_yaml("app:\n  port: 9000\n").unwrap();
        assert_eq!(cfg.app.get_db(), "books.db");
        assert_eq!(cfg.app.get_port(), 9000);

        let cfg = Config::from_yaml("{}").unwrap();
        assert_eq!(cfg.app.get_port(), 5000);
    }

    #[test]
    fn substitutes_env_vars_and_defaults() {
        // SAFETY: the variable name is unique to this test.
        unsafe { env::set_var("BOOKSHELF_TEST_DB_NAME", "env.db") };

        let yaml = "app:\n  database: ${BOOKSHELF_TEST_DB_NAME}\n  port: ${BOOKSHELF_TEST_UNSET_PORT:-7070}\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.app.get_db(), "env.db");
        assert_eq!(cfg.app.get_port(), 7070);
    }

    #[test]
    fn unset_var_without_default_becomes_empty() {
        let out = Config::substitute_env_vars("a${BOOKSHELF_TEST_NEVER_SET}b").unwrap();
        assert_eq!(out, "ab");
    }
}
