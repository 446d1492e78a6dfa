use async_trait::async_trait;
use sqlx::Error;

use super::db::DBClient;
use crate::models::interactionmodel::{Interaction, Message};

#[async_trait]
pub trait InteractionExt {
    /// Newest first. `limit = None` returns every interaction.
    async fn get_interactions(
        &self,
        business_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<Interaction>, Error>;

    async fn get_interaction(
        &self,
        interaction_id: i64,
    ) -> Result<Option<Interaction>, Error>;

    async fn get_interaction_messages(
        &self,
        interaction_id: i64,
    ) -> Result<Vec<Message>, Error>;
}

#[async_trait]
impl InteractionExt for DBClient {
    async fn get_interactions(
        &self,
        business_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<Interaction>, Error> {
        // LIMIT NULL is LIMIT ALL
        sqlx::query_as::<_, Interaction>(
            r#"
            SELECT id, business_id, customer_id, interaction_type, start_time,
                   end_time, duration, summary, created_at
            FROM interactions
            WHERE business_id = $1
            ORDER BY start_time DESC
            LIMIT $2
            "#,
        )
        .bind(business_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_interaction(
        &self,
        interaction_id: i64,
    ) -> Result<Option<Interaction>, Error> {
        sqlx::query_as::<_, Interaction>(
            r#"
            SELECT id, business_id, customer_id, interaction_type, start_time,
                   end_time, duration, summary, created_at
            FROM interactions
            WHERE id = $1
            "#,
        )
        .bind(interaction_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_interaction_messages(
        &self,
        interaction_id: i64,
    ) -> Result<Vec<Message>, Error> {
        sqlx::query_as::<_, Message>(
            r#"
            SELECT id, interaction_id, sender_type, content, timestamp
            FROM messages
            WHERE interaction_id = $1
            ORDER BY timestamp ASC
            "#,
        )
        .bind(interaction_id)
        .fetch_all(&self.pool)
        .await
    }
}
