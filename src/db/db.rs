// db/db.rs
use redis::{aio::ConnectionManager, AsyncCommands};
use sqlx::{Pool, Postgres};

#[derive(Clone)]
pub struct DBClient {
    pub pool: Pool<Postgres>,
    pub redis_client: Option<ConnectionManager>,
}

impl std::fmt::Debug for DBClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DBClient")
            .field("pool", &"Pool<Postgres>")
            .field("redis_client", &self.redis_client.is_some())
            .finish()
    }
}

impl DBClient {
    /// Create a new DBClient with PostgreSQL pool only
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient {
            pool,
            redis_client: None,
        }
    }

    /// Create a DBClient backed by PostgreSQL and, when reachable, Redis.
    /// Redis failures are logged and the client carries on without it.
    pub async fn with_redis(pool: Pool<Postgres>, redis_url: &str) -> Self {
        let client = match redis::Client::open(redis_url) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("Failed to create Redis client: {}. Continuing without it.", e);
                return DBClient::new(pool);
            }
        };

        match ConnectionManager::new(client).await {
            Ok(conn) => {
                tracing::info!("Redis connection established successfully");
                DBClient {
                    pool,
                    redis_client: Some(conn),
                }
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Continuing without it.", e);
                DBClient::new(pool)
            }
        }
    }

    pub fn is_redis_available(&self) -> bool {
        self.redis_client.is_some()
    }

    fn blacklist_key(token: &str) -> String {
        format!("token_blacklist:{}", token)
    }

    /// Marks a token as revoked until it would have expired anyway.
    /// No-op without Redis.
    pub async fn revoke_token(&self, token: &str, ttl_seconds: usize) -> Result<(), redis::RedisError> {
        if let Some(manager) = &self.redis_client {
            let mut conn = manager.clone();
            let _: () = conn.set_ex(Self::blacklist_key(token), 1, ttl_seconds).await?;
        }
        Ok(())
    }

    pub async fn is_token_revoked(&self, token: &str) -> bool {
        let Some(manager) = &self.redis_client else {
            return false;
        };

        let mut conn = manager.clone();
        match conn.exists::<_, bool>(Self::blacklist_key(token)).await {
            Ok(revoked) => revoked,
            Err(e) => {
                tracing::warn!("Token blacklist lookup failed: {}", e);
                false
            }
        }
    }
}
