use async_trait::async_trait;
use sqlx::Error;

use super::db::DBClient;
use crate::models::customermodel::Customer;

#[async_trait]
pub trait CustomerExt {
    async fn get_customer(&self, customer_id: i64) -> Result<Option<Customer>, Error>;
}

#[async_trait]
impl CustomerExt for DBClient {
    async fn get_customer(&self, customer_id: i64) -> Result<Option<Customer>, Error> {
        sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, phone, is_new, created_at FROM customers WHERE id = $1",
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
    }
}
