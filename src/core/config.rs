use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione leggendo le chiavi da `lookup`
    /// (separato da `from_env` per poterlo testare senza toccare l'ambiente del processo)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| "DATABASE_URL must be set in the environment or .env file".to_string())?;

        if !(database_url.starts_with("postgres://") || database_url.starts_with("postgresql://")) {
            return Err(
                "Invalid DATABASE_URL: expected a postgres:// or postgresql:// connection string"
                    .to_string(),
            );
        }

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = parse_or(
            &lookup,
            "SERVER_PORT",
            8080u16,
            "Invalid SERVER_PORT: must be a number between 0-65535",
        )?;

        let max_connections = parse_or(
            &lookup,
            "MAX_DB_CONNECTIONS",
            10u32,
            "Invalid MAX_DB_CONNECTIONS: must be a positive number",
        )?;
        if max_connections == 0 {
            return Err("Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string());
        }

        let db_acquire_timeout_secs = parse_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            5u64,
            "Invalid DB_ACQUIRE_TIMEOUT_SECS: must be a positive number",
        )?;

        let request_timeout_secs = parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            30u64,
            "Invalid REQUEST_TIMEOUT_SECS: must be a positive number",
        )?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            db_acquire_timeout_secs,
            request_timeout_secs,
            app_env,
        })
    }

    /// Indirizzo su cui mettersi in ascolto, `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logga la configurazione (nascondendo le credenziali del database)
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}", self.bind_address());
        info!("   Database: {}", Self::mask_url(&self.database_url));
        info!("   Max DB Connections: {}", self.max_connections);
        info!("   DB Acquire Timeout: {}s", self.db_acquire_timeout_secs);
        info!("   Request Timeout: {}s", self.request_timeout_secs);
    }

    /// Maschera l'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.rfind('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        "***".to_string()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T, error: &str) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| error.to_string()),
        None => Ok(default),
    }
}
