use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

pub fn default_server_url() -> String {
    std::env::var("SENTIMENT_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// `None` leaves the HTTP client's own default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Drop predict responses that resolve after a newer submission.
    #[serde(default)]
    pub latest_only: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_url: default_server_url(),
            timeout_secs: None,
            latest_only: false,
        }
    }
}

impl ClientConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "config file {} does not exist",
                path.display()
            ));
        }
        let config_file = File::open(path)?;
        let config: ClientConfig = serde_json::from_reader(config_file)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::ClientConfig;
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        temp_dir().join(format!(
            "sentiment_console_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.server_url.starts_with("http"));
        assert_eq!(config.timeout_secs, None);
        assert!(!config.latest_only);
    }

    #[test]
    fn test_partial_config_file() {
        let path = scratch_path("partial_config");
        fs::write(&path, r#"{"timeout_secs": 5}"#).unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.timeout_secs, Some(5));
        assert!(!config.latest_only);
        assert!(!config.server_url.is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_full_config_file() {
        let path = scratch_path("full_config");
        fs::write(
            &path,
            r#"{"server_url": "http://example.test:9000", "latest_only": true}"#,
        )
        .unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.server_url, "http://example.test:9000");
        assert!(config.latest_only);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_config_file() {
        let path = scratch_path("no_such_config");
        assert!(ClientConfig::from_file(&path).is_err());
    }
}
