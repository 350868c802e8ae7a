//! Core configuration types
//!
//! This module defines the data structures that represent a sitepipe.yml
//! configuration file. Every field has a default matching the conventional
//! Hugo + Stitch layout, so the tool runs without any config file at all.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Site name (optional, used as the CLI display name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Glob patterns for the output locations wiped by `clean`
    #[serde(default = "default_clean_targets")]
    pub clean: Vec<String>,

    /// Static-site generator settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Hosting platform settings
    #[serde(default)]
    pub hosting: HostingConfig,

    /// Interpreter to use for commands (e.g., ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,

    /// Extra variables, available for interpolation and exported to
    /// spawned commands
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: None,
            clean: default_clean_targets(),
            site: SiteConfig::default(),
            hosting: HostingConfig::default(),
            interpreter: None,
            env: HashMap::new(),
        }
    }
}

/// Static-site generator settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Source directory holding config.toml, content/ and themes/
    #[serde(default = "default_site_source")]
    pub source: String,

    /// Generator binary
    #[serde(default = "default_site_bin")]
    pub bin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            source: default_site_source(),
            bin: default_site_bin(),
        }
    }
}

/// Hosting platform settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostingConfig {
    /// Hosting CLI binary
    #[serde(default = "default_hosting_bin")]
    pub bin: String,

    /// Environment variable holding the private API key
    #[serde(default = "default_private_key_env")]
    pub private_key_env: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for HostingConfig {
    fn default() -> Self {
        HostingConfig {
            bin: default_hosting_bin(),
            private_key_env: default_private_key_env(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_clean_targets() -> Vec<String> {
    vec!["./hosting/files".to_string(), "./public".to_string()]
}

fn default_site_source() -> String {
    "./hugo".to_string()
}

fn default_site_bin() -> String {
    "hugo".to_string()
}

fn default_hosting_bin() -> String {
    "stitch-cli".to_string()
}

fn default_private_key_env() -> String {
    "STITCH_PRIVATE_API_KEY".to_string()
}

fn default_api_key_env() -> String {
    "STITCH_API_KEY".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.clean, vec!["./hosting/files", "./public"]);
        assert_eq!(config.site.source, "./hugo");
        assert_eq!(config.site.bin, "hugo");
        assert_eq!(config.hosting.bin, "stitch-cli");
        assert_eq!(config.hosting.private_key_env, "STITCH_PRIVATE_API_KEY");
        assert_eq!(config.hosting.api_key_env, "STITCH_API_KEY");
        assert!(config.interpreter.is_none());
        assert!(config.env.is_empty());
    }

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.clean, vec!["./hosting/files", "./public"]);
        assert_eq!(config.site.bin, "hugo");
    }

    #[test]
    fn test_deserialize_partial_site_section() {
        let yaml = r#"
site:
  bin: /opt/hugo/hugo
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site.bin, "/opt/hugo/hugo");
        // unspecified field keeps its default
        assert_eq!(config.site.source, "./hugo");
    }

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
name: my-site
clean:
  - ./out
site:
  source: ./www
  bin: hugo
hosting:
  bin: stitch-cli
  private_key_env: MY_PRIVATE_KEY
  api_key_env: MY_API_KEY
interpreter:
  - bash
  - -c
env:
  SITE_ENV: production
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, Some("my-site".to_string()));
        assert_eq!(config.clean, vec!["./out"]);
        assert_eq!(config.site.source, "./www");
        assert_eq!(config.hosting.private_key_env, "MY_PRIVATE_KEY");
        assert_eq!(
            config.interpreter,
            Some(vec!["bash".to_string(), "-c".to_string()])
        );
        assert_eq!(config.env.get("SITE_ENV").unwrap(), "production");
    }
}
