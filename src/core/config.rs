use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub seed: SeedConfig,
    pub swagger: SwaggerConfig,
    pub analytics: AnalyticsConfig,
    pub slug: SlugConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub version: String,
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

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub jwt_leeway: Duration,
}

// Keep the secret out of logs
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("jwt_leeway", &self.jwt_leeway)
            .finish()
    }
}

/// First-run account seeding
#[derive(Clone)]
pub struct SeedConfig {
    /// Only consulted when the `superadmin` account does not exist yet
    pub superadmin_default_password: Option<String>,
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field(
                "superadmin_default_password",
                &self.superadmin_default_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Capacity of the page view queue drained by the background recorder
    pub queue_capacity: usize,
}

/// Limits for unique slug generation
#[derive(Debug, Clone, Copy)]
pub struct SlugConfig {
    pub max_attempts: u32,
    /// Exclusive upper bound of the random numeric suffix
    pub suffix_max: u32,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_attempts: SlugConfig::DEFAULT_MAX_ATTEMPTS,
            suffix_max: SlugConfig::DEFAULT_SUFFIX_MAX,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            seed: SeedConfig::from_env(),
            swagger: SwaggerConfig::from_env()?,
            analytics: AnalyticsConfig::from_env()?,
            slug: SlugConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_CORS_ALLOWED_ORIGINS: &'static str = "http://localhost:3000,http://localhost:3001";

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8081".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| Self::DEFAULT_CORS_ALLOWED_ORIGINS.to_string()),
        );

        let version =
            env::var("APP_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            version,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated origin list, dropping blanks
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl AuthConfig {
    const DEFAULT_JWT_EXPIRY_HOURS: u64 = 24;
    const DEFAULT_JWT_LEEWAY_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "JWT_SECRET environment variable is required".to_string())?;

        let expiry_hours = env::var("JWT_EXPIRY_HOURS")
            .unwrap_or_else(|_| Self::DEFAULT_JWT_EXPIRY_HOURS.to_string())
            .parse::<u64>()
            .map_err(|_| "JWT_EXPIRY_HOURS must be a valid number".to_string())?;

        let jwt_leeway_secs = env::var("JWT_LEEWAY")
            .unwrap_or_else(|_| Self::DEFAULT_JWT_LEEWAY_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "JWT_LEEWAY must be a valid number".to_string())?;

        Ok(Self {
            jwt_secret,
            token_ttl: Duration::from_secs(expiry_hours * 3600),
            jwt_leeway: Duration::from_secs(jwt_leeway_secs),
        })
    }
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self {
            superadmin_default_password: env::var("SUPERADMIN_DEFAULT_PASSWORD")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Desa CMS API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the village website backend".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl AnalyticsConfig {
    const DEFAULT_QUEUE_CAPACITY: usize = 1024;

    pub fn from_env() -> Result<Self, String> {
        let queue_capacity = env::var("PAGE_VIEW_QUEUE_CAPACITY")
            .unwrap_or_else(|_| Self::DEFAULT_QUEUE_CAPACITY.to_string())
            .parse::<usize>()
            .map_err(|_| "PAGE_VIEW_QUEUE_CAPACITY must be a valid number".to_string())?;

        if queue_capacity == 0 {
            return Err("PAGE_VIEW_QUEUE_CAPACITY must be greater than zero".to_string());
        }

        Ok(Self { queue_capacity })
    }
}

impl SlugConfig {
    const DEFAULT_MAX_ATTEMPTS: u32 = 50;
    const DEFAULT_SUFFIX_MAX: u32 = 1000;

    pub fn from_env() -> Result<Self, String> {
        let max_attempts = env::var("SLUG_MAX_ATTEMPTS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_ATTEMPTS.to_string())
            .parse::<u32>()
            .map_err(|_| "SLUG_MAX_ATTEMPTS must be a valid number".to_string())?;

        let suffix_max = env::var("SLUG_SUFFIX_MAX")
            .unwrap_or_else(|_| Self::DEFAULT_SUFFIX_MAX.to_string())
            .parse::<u32>()
            .map_err(|_| "SLUG_SUFFIX_MAX must be a valid number".to_string())?;

        if max_attempts == 0 || suffix_max < 2 {
            return Err("SLUG_MAX_ATTEMPTS must be >= 1 and SLUG_SUFFIX_MAX >= 2".to_string());
        }

        Ok(Self {
            max_attempts,
            suffix_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_blanks() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_slug_config_defaults() {
        let config = SlugConfig::default();
        assert_eq!(config.max_attempts, 50);
        assert_eq!(config.suffix_max, 1000);
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("docs".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert!(swagger.credentials().is_none());

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials().as_deref(), Some("docs:secret"));
    }
}
