use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Parse `key` from the environment, using `default` when it is unset
fn env_or<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

fn env_string_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated list, dropping blanks
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // .env is optional; a missing file is fine
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
        })
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 3000;

    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            host: env_string_or("HOST", "127.0.0.1"),
            port: env_or("PORT", Self::DEFAULT_PORT)?,
            cors_allowed_origins: split_list(&env_string_or("CORS_ALLOWED_ORIGINS", "*")),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: env_or("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: env_or("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: env_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: env_or("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: env_or("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        Self {
            username: env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty()),
            password: env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty()),
            title: env_string_or("SWAGGER_TITLE", "Learn Content API"),
            version: env_string_or("SWAGGER_VERSION", env!("CARGO_PKG_VERSION")),
            description: env_string_or(
                "SWAGGER_DESCRIPTION",
                "Read-only API for learn categories and articles",
            ),
        }
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("https://a.example, https://b.example,,"),
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(split_list("*"), vec!["*"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_env_or_default_and_error() {
        // Keys unique to this test so parallel tests do not interfere
        assert_eq!(env_or("LEARN_TEST_UNSET_NUMBER", 7u32), Ok(7));

        env::set_var("LEARN_TEST_BAD_NUMBER", "seven");
        assert_eq!(
            env_or::<u32>("LEARN_TEST_BAD_NUMBER", 7),
            Err("LEARN_TEST_BAD_NUMBER must be a valid number".to_string())
        );

        env::set_var("LEARN_TEST_GOOD_NUMBER", " 42 ");
        assert_eq!(env_or("LEARN_TEST_GOOD_NUMBER", 7u64), Ok(42));
    }

    #[test]
    fn test_swagger_credentials_need_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("docs".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("docs:secret".to_string()));
    }
}
