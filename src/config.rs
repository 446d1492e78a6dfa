#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Token and cookie lifetime in minutes.
    pub jwt_maxage: i64,
    pub port: u16,
    pub redis_url: Option<String>,
    pub allowed_origins: Vec<String>,
    pub db_max_connections: u32,
}

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:8000";

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set");

        let jwt_maxage = std::env::var("JWT_MAXAGE")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(60);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8000);
        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        // Optional; without it logout only clears the cookie
        let redis_url = std::env::var("REDIS_URL").ok().filter(|v| !v.is_empty());

        let allowed_origins = parse_origins(
            &std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string()),
        );

        Config {
            database_url,
            jwt_secret,
            jwt_maxage,
            port,
            redis_url,
            allowed_origins,
            db_max_connections,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.to_string())
        .collect()
}
