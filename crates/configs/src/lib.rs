use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// Directory served as the storefront UI shell
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            worker_threads: Some(4),
            frontend_dir: default_frontend_dir(),
        }
    }
}

fn default_frontend_dir() -> String {
    "frontend".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_acquire_timeout() -> u64 { 30 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.frontend_dir.trim().is_empty() {
            self.frontend_dir = default_frontend_dir();
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Fill the URL from the environment when the TOML omits it.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!(
                "database.url is empty; set it in config.toml or via DATABASE_URL"
            ));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_normalizes_blank_host_and_threads() {
        let mut s = ServerConfig { host: "  ".into(), port: 9000, worker_threads: Some(0), frontend_dir: "".into() };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
        assert_eq!(s.frontend_dir, "frontend");
    }

    #[test]
    fn database_config_rejects_non_postgres_url() {
        let d = DatabaseConfig { url: "mysql://x".into(), ..Default::default() };
        assert!(d.validate().is_err());
    }

    #[test]
    fn database_config_rejects_inverted_pool_bounds() {
        let d = DatabaseConfig {
            url: "postgres://localhost/compumax".into(),
            max_connections: 1,
            min_connections: 5,
            connect_timeout_secs: 30,
            acquire_timeout_secs: 30,
            sqlx_logging: false,
        };
        assert!(d.validate().is_err());
    }
}
