//! # Mock Clients
//!
//! Test doubles for code that sits on top of a [`ResourceClient`], such as
//! [`CartClient`](crate::clients::CartClient) and [`CatalogClient`](crate::clients::CatalogClient).
//! Nothing here spawns a real actor.
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue canned replies up front, then call [`MockClient::verify`].
//! - [`create_mock_client`] with [`expect_get`] / [`expect_action`]: receive each request
//!   yourself, inspect its payload, and answer through the reply channel.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Cart>::new();
//! mock.expect_action(CartId(1))
//!     .return_err(FrameworkError::ActorClosed);
//!
//! let client = CartClient::new(mock.client(), CartId(1), watcher, notifier);
//! assert_eq!(client.add_product(ProductId(3)).await, Outcome::Rejected(Notice::AddFailed));
//! mock.verify();
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A client whose replies are scripted in advance.
///
/// Requests are matched against expectations in FIFO order. A request of the wrong kind,
/// or for a different id, panics the background task, which surfaces in the test as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let pending = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = pending.lock().pop_front();
                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get issued for an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action issued for an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            record: Box::new(move |response| Expectation::Get { id, response }),
        }
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            record: Box::new(move |response| Expectation::Action { id, response }),
        }
    }

    /// Panics unless every expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Completes an expectation with its reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    record: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Replies with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Replies with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.record)(response);
        self.expectations.lock().push_back(expectation);
    }
}

/// Creates a client and the receiving end of its mailbox.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Receives the next request, returning it only if it is a `get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next request, returning it only if it is an action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
