//! # Generic Actor Server
//!
//! [`ResourceActor`] owns a set of entities and the receiving end of their mailbox.
//! Requests are processed strictly in arrival order; an entity hook that awaits
//! (a catalog lookup, for instance) delays every request queued behind it.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of an actor: a store of entities plus a mailbox.
///
/// Only the task running [`run`](Self::run) touches `store`, so no lock guards it.
/// A cart session is a single `Cart` entity held by one of these; the local catalog
/// is a `ResourceActor<CatalogItem>` holding one entity per product.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Cart>::new(32);
/// tokio::spawn(actor.run(context));
/// let cart_id = client.create(CartOpen).await?;
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and a client bound to its mailbox.
    ///
    /// `buffer_size` bounds the mailbox; senders wait once it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        Self::not_found(entity_type, id, respond_to);
                        continue;
                    };
                    let result = match item.on_update(update, &context).await {
                        Ok(()) => {
                            info!(entity_type, %id, "Updated");
                            Ok(item.clone())
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        Self::not_found(entity_type, id, respond_to);
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(outcome) => info!(entity_type, %id, ?outcome, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T::Id, FrameworkError> {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        item.on_create(context).await.map_err(|e| {
            warn!(entity_type, error = %e, "on_create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    fn not_found<R>(entity_type: &str, id: T::Id, respond_to: Response<R>) {
        warn!(entity_type, %id, "Not found");
        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterCreate {
        start: i64,
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(i64),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter would go negative")]
    struct Underflow;

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Update = i64;
        type Action = CounterAction;
        type ActionResult = i64;
        type Context = ();
        type Error = Underflow;

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Underflow> {
            if params.start < 0 {
                return Err(Underflow);
            }
            Ok(Self {
                id,
                value: params.start,
            })
        }

        async fn on_update(&mut self, value: i64, _ctx: &()) -> Result<(), Underflow> {
            self.value = value;
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CounterAction,
            _ctx: &(),
        ) -> Result<i64, Underflow> {
            match action {
                CounterAction::Add(delta) if self.value + delta < 0 => Err(Underflow),
                CounterAction::Add(delta) => {
                    self.value += delta;
                    Ok(self.value)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_requests_are_applied_in_order() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        let handle = tokio::spawn(actor.run(()));

        let id = client.create(CounterCreate { start: 1 }).await.unwrap();
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, CounterAction::Add(4)).await.unwrap(), 5);
        let err = client
            .perform_action(id, CounterAction::Add(-10))
            .await
            .unwrap_err();
        assert!(err.entity_error::<Underflow>().is_some());

        let updated = client.update(id, 42).await.unwrap();
        assert_eq!(updated.value, 42);
        assert_eq!(client.get(id).await.unwrap().unwrap().value, 42);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_entity_reports_not_found() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));

        assert!(client.get(7).await.unwrap().is_none());
        let err = client.perform_action(7, CounterAction::Add(1)).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(id) if id == "7"));
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_store() {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));

        assert!(client.create(CounterCreate { start: -1 }).await.is_err());
        let id = client.create(CounterCreate { start: 0 }).await.unwrap();
        assert!(client.get(id).await.unwrap().is_some());
        assert!(client.get(1).await.unwrap().is_none());
    }
}
