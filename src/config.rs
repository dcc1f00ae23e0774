use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub public_database_url: String,
    pub public_role: Option<String>,
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub secure_cookies: bool,
    pub host: IpAddr,
    pub port: u16,
    pub run_migrations: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let public_database_url = env_or("KRII_PUBLIC_DATABASE_URL", &database_url);

        let public_role = std::env::var("KRII_PUBLIC_ROLE")
            .ok()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        let session_secret = env_required("KRII_SESSION_SECRET")?;
        if session_secret.len() < 16 {
            return Err("KRII_SESSION_SECRET must be at least 16 characters".to_string());
        }

        let session_ttl_hours: i64 = env_or("KRII_SESSION_TTL_HOURS", "168")
            .parse()
            .map_err(|e| format!("Invalid KRII_SESSION_TTL_HOURS: {e}"))?;
        if session_ttl_hours <= 0 {
            return Err("KRII_SESSION_TTL_HOURS must be positive".to_string());
        }

        let secure_cookies = env_flag("KRII_SECURE_COOKIES", true)?;

        let host: IpAddr = env_or("KRII_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid KRII_HOST: {e}"))?;

        let port: u16 = env_or("KRII_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid KRII_PORT: {e}"))?;

        let run_migrations = env_flag("KRII_RUN_MIGRATIONS", false)?;

        let log_level = env_or("KRII_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            public_database_url,
            public_role,
            session_secret,
            session_ttl_hours,
            secure_cookies,
            host,
            port,
            run_migrations,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str, default: bool) -> Result<bool, String> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(format!("Invalid {key}: expected a boolean, got '{other}'")),
        },
    }
}
