//! # Generic Messages
//!
//! Requests travelling from a [`ResourceClient`](crate::framework::ResourceClient) to its
//! [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request in an actor's mailbox.
///
/// The mailbox is drained one message at a time, so a `Cart` action that awaits a stock
/// lookup holds back every later cart request until it has committed or given up.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
