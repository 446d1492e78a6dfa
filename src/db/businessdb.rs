use async_trait::async_trait;
use sqlx::Error;

use super::db::DBClient;
use crate::models::businessmodel::{Business, BusinessType};

#[async_trait]
pub trait BusinessExt {
    async fn get_business(
        &self,
        business_id: Option<i64>,
        email: Option<&str>,
    ) -> Result<Option<Business>, Error>;

    async fn save_business<T: Into<String> + Send>(
        &self,
        business_name: T,
        email: T,
        password_hash: T,
        business_type: BusinessType,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<Business, Error>;

    async fn update_business_profile<T: Into<String> + Send>(
        &self,
        business_id: i64,
        business_name: T,
        business_type: BusinessType,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<Business, Error>;

    async fn update_business_password(
        &self,
        business_id: i64,
        password_hash: String,
    ) -> Result<Business, Error>;
}

#[async_trait]
impl BusinessExt for DBClient {
    async fn get_business(
        &self,
        business_id: Option<i64>,
        email: Option<&str>,
    ) -> Result<Option<Business>, Error> {
        let mut business: Option<Business> = None;

        if let Some(business_id) = business_id {
            business = sqlx::query_as::<_, Business>(
                r#"
                SELECT id, business_name, email, password_hash, business_type,
                       phone, address, created_at
                FROM businesses
                WHERE id = $1
                "#,
            )
            .bind(business_id)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(email) = email {
            business = sqlx::query_as::<_, Business>(
                r#"
                SELECT id, business_name, email, password_hash, business_type,
                       phone, address, created_at
                FROM businesses
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        }

        Ok(business)
    }

    async fn save_business<T: Into<String> + Send>(
        &self,
        business_name: T,
        email: T,
        password_hash: T,
        business_type: BusinessType,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<Business, Error> {
        sqlx::query_as::<_, Business>(
            r#"
            INSERT INTO businesses (business_name, email, password_hash, business_type, phone, address)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, business_name, email, password_hash, business_type,
                      phone, address, created_at
            "#,
        )
        .bind(business_name.into())
        .bind(email.into())
        .bind(password_hash.into())
        .bind(business_type)
        .bind(phone)
        .bind(address)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_business_profile<T: Into<String> + Send>(
        &self,
        business_id: i64,
        business_name: T,
        business_type: BusinessType,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<Business, Error> {
        sqlx::query_as::<_, Business>(
            r#"
            UPDATE businesses
            SET business_name = $2, business_type = $3, phone = $4, address = $5
            WHERE id = $1
            RETURNING id, business_name, email, password_hash, business_type,
                      phone, address, created_at
            "#,
        )
        .bind(business_id)
        .bind(business_name.into())
        .bind(business_type)
        .bind(phone)
        .bind(address)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_business_password(
        &self,
        business_id: i64,
        password_hash: String,
    ) -> Result<Business, Error> {
        sqlx::query_as::<_, Business>(
            r#"
            UPDATE businesses
            SET password_hash = $2
            WHERE id = $1
            RETURNING id, business_name, email, password_hash, business_type,
                      phone, address, created_at
            "#,
        )
        .bind(business_id)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
    }
}
