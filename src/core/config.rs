use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Document store settings: target database plus the gateway's bounded
/// reconnect policy.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database: String,
    pub connect_retries: u32,
    pub retry_delay_ms: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
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
            store: StoreConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StoreConfig {
    const DEFAULT_DATABASE: &'static str = "geo2025db";
    const DEFAULT_CONNECT_RETRIES: u32 = 3;
    const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

    pub fn from_env() -> Result<Self, String> {
        let database =
            env::var("GEO_DATABASE").unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string());

        let connect_retries = env::var("STORE_CONNECT_RETRIES")
            .unwrap_or_else(|_| Self::DEFAULT_CONNECT_RETRIES.to_string())
            .parse::<u32>()
            .map_err(|_| "STORE_CONNECT_RETRIES must be a valid number".to_string())?;

        let retry_delay_ms = env::var("STORE_CONNECT_RETRY_DELAY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_RETRY_DELAY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "STORE_CONNECT_RETRY_DELAY_MS must be a valid number".to_string())?;

        Ok(Self {
            database,
            connect_retries,
            retry_delay_ms,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            title: env::var("SWAGGER_TITLE").unwrap_or_else(|_| "GeoData API".to_string()),
            version: env::var("SWAGGER_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            description: env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
                "CRUD backend exposing cities, states, and countries".to_string()
            }),
        })
    }
}
