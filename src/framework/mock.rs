//! # Mock Framework
//!
//! Utilities for testing clients in isolation, without a real repository behind them.
//!
//! Use [`MockClient`] to queue canned responses and [`MockClient::verify`] that
//! all of them were consumed. For finer control, [`create_mock_client`] hands
//! back the raw receiver and the `expect_*` helpers pull requests off it.

use super::client::RepositoryClient;
use super::entity::Entity;
use super::error::FrameworkError;
use super::message::{RepositoryRequest, Response};
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A canned response for the next request of the matching kind.
enum Expectation<T: Entity> {
    Save(Result<T, FrameworkError>),
    FindById(Result<Option<T>, FrameworkError>),
    FindAll(Result<Vec<T>, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Update(Result<T, FrameworkError>),
    Query(Result<Vec<T>, FrameworkError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Book, BookQuery>::new();
/// mock.expect_find_by_id().return_ok(Some(book));
/// mock.expect_query().return_ok(vec![]);
///
/// let client = BookClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: Entity, Q> {
    client: RepositoryClient<T, Q>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Entity, Q: Send + Debug + 'static> MockClient<T, Q> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RepositoryRequest<T, Q>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queued = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queued.lock().expect("mock lock poisoned").pop_front();

                match (request, expectation) {
                    (RepositoryRequest::Save { respond_to, .. }, Some(Expectation::Save(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (RepositoryRequest::FindById { respond_to, .. }, Some(Expectation::FindById(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (RepositoryRequest::FindAll { respond_to }, Some(Expectation::FindAll(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (RepositoryRequest::Delete { respond_to, .. }, Some(Expectation::Delete(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (RepositoryRequest::Update { respond_to, .. }, Some(Expectation::Update(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (RepositoryRequest::Query { respond_to, .. }, Some(Expectation::Query(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: RepositoryClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RepositoryClient<T, Q> {
        self.client.clone()
    }

    /// Expects a `save` operation.
    pub fn expect_save(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Save)
    }

    /// Expects a `find_by_id` operation.
    pub fn expect_find_by_id(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::FindById)
    }

    /// Expects a `find_all` operation.
    pub fn expect_find_all(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::FindAll)
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, ()> {
        self.builder(Expectation::Delete)
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Update)
    }

    /// Expects a repository-specific query.
    pub fn expect_query(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::Query)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock lock poisoned").len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(&self, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

impl<T: Entity, Q: Send + Debug + 'static> Default for MockClient<T, Q> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<T: Entity, R> {
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    expectations: Expectations<T>,
}

impl<T: Entity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock lock poisoned")
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test plays the actor: pull each request with an `expect_*` helper,
/// assert on its payload, then answer through the returned responder.
pub fn create_mock_client<T: Entity, Q: Send + Debug + 'static>(
    buffer_size: usize,
) -> (RepositoryClient<T, Q>, mpsc::Receiver<RepositoryRequest<T, Q>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RepositoryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: Entity, Q>(
    receiver: &mut mpsc::Receiver<RepositoryRequest<T, Q>>,
) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(RepositoryRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity, Q>(
    receiver: &mut mpsc::Receiver<RepositoryRequest<T, Q>>,
) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(RepositoryRequest::Update { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: Entity, Q>(
    receiver: &mut mpsc::Receiver<RepositoryRequest<T, Q>>,
) -> Option<(Q, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(RepositoryRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}
