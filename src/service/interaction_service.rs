use std::sync::Arc;

use crate::{
    db::{customerdb::CustomerExt, db::DBClient, interactiondb::InteractionExt},
    models::{
        customermodel::Customer,
        interactionmodel::{Interaction, Message},
    },
    service::error::ServiceError,
};

#[derive(Debug, Clone)]
pub struct InteractionDetail {
    pub interaction: Interaction,
    /// `None` when the customer row has since been removed.
    pub customer: Option<Customer>,
    pub messages: Vec<Message>,
}

#[derive(Debug)]
pub struct InteractionService<S = DBClient> {
    store: Arc<S>,
}

impl<S> InteractionService<S>
where
    S: InteractionExt + CustomerExt + Send + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Loads an interaction with its customer and transcript, provided it
    /// belongs to `business_id`.
    pub async fn get_interaction_detail(
        &self,
        business_id: i64,
        interaction_id: i64,
    ) -> Result<InteractionDetail, ServiceError> {
        let interaction = self
            .store
            .get_interaction(interaction_id)
            .await?
            .ok_or(ServiceError::InteractionNotFound(interaction_id))?;

        ensure_owner(&interaction, business_id)?;

        let customer = self.store.get_customer(interaction.customer_id).await?;
        let messages = self
            .store
            .get_interaction_messages(interaction.id)
            .await?;

        Ok(InteractionDetail {
            interaction,
            customer,
            messages,
        })
    }
}

fn ensure_owner(interaction: &Interaction, business_id: i64) -> Result<(), ServiceError> {
    if interaction.business_id != business_id {
        return Err(ServiceError::AccessDenied(business_id, interaction.id));
    }
    Ok(())
}
