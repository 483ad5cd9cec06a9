use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SALESPRO_CONFIG";
/// Overrides `[upstream] url`.
pub const UPSTREAM_URL_ENV: &str = "SALESPRO_UPSTREAM_URL";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UpstreamConfig {
    /// PHP endpoint, e.g. `https://host/salespro/api.php`
    #[serde(default = "default_upstream_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StaticFilesConfig {
    #[serde(default = "default_static_dir")]
    pub dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_upstream_url() -> String {
    "https://so-monitoring.infinityfree.me/salespro/api.php".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_static_dir() -> String {
    "dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Config {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address '{}': {}", raw, e))
    }

    /// Non-empty `url` replaces the configured upstream.
    pub fn with_upstream_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.upstream.url = url;
        }
        self
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[upstream]
url = "https://so-monitoring.infinityfree.me/salespro/api.php"
timeout_secs = 30

[static_files]
dir = "dist"
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.upstream.url.trim().is_empty() {
        anyhow::bail!("[upstream] url must not be empty");
    }
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

fn exe_config_path() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}

/// Load configuration
///
/// Search order:
/// 1. `SALESPRO_CONFIG`, if set (a missing file is an error)
/// 2. `config.toml` next to the executable
/// 3. Embedded default config
///
/// `SALESPRO_UPSTREAM_URL` is applied on top of whichever was found.
pub fn load_config() -> anyhow::Result<Config> {
    let config = if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        read_config(Path::new(&path))?
    } else {
        match exe_config_path() {
            Some(path) if path.exists() => read_config(&path)?,
            Some(path) => {
                tracing::warn!("config.toml not found at: {}", path.display());
                tracing::info!("Using default embedded configuration");
                parse_config(DEFAULT_CONFIG)?
            }
            None => {
                tracing::info!("Using default embedded configuration");
                parse_config(DEFAULT_CONFIG)?
            }
        }
    };
    Ok(config.with_upstream_override(std::env::var(UPSTREAM_URL_ENV).ok()))
}

/// Static directory; relative paths resolve against the working directory.
pub fn static_dir(config: &Config) -> PathBuf {
    PathBuf::from(&config.static_files.dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.static_files.dir, "dist");
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[upstream]\nurl = \"http://127.0.0.1:8080/api.php\"\n").unwrap();
        assert_eq!(config.upstream.url, "http://127.0.0.1:8080/api.php");
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_empty_upstream_is_rejected() {
        assert!(parse_config("[upstream]\nurl = \"  \"\n").is_err());
    }

    #[test]
    fn test_upstream_override() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let same = config.clone().with_upstream_override(Some("   ".into()));
        assert_eq!(same, config);

        let moved = config.with_upstream_override(Some("http://localhost:9000/api.php".into()));
        assert_eq!(moved.upstream.url, "http://localhost:9000/api.php");
    }

    #[test]
    fn test_bad_host_is_an_error() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".into();
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let upstream = UpstreamConfig {
            url: "http://x".into(),
            timeout_secs: 0,
        };
        assert_eq!(upstream.timeout(), Duration::from_secs(1));
    }
}
