//! # Mock Session
//!
//! Utilities for testing resources without a real transport.
//!
//! Use [`MockSession::new`] to get a scripted session, queue responses with
//! [`MockSession::expect`], then hand [`MockSession::session`] to the resource
//! under test. [`MockSession::verify`] asserts every expectation was consumed.

use crate::session::{Method, Params, Session, SessionError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected remote call and the response to hand back for it.
#[derive(Debug)]
struct Expectation {
    method: Method,
    response: Result<Value, SessionError>,
}

/// A call the mock actually received, kept for assertions on params.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub params: Params,
}

#[derive(Debug, Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<RecordedCall>,
}

/// A scripted [`Session`] with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A call whose method does not match the
/// next expectation, or a call with no expectation left, panics the test.
///
/// # Example
/// ```
/// use social_graph::session::{mock::MockSession, Method};
/// use serde_json::json;
///
/// let mock = MockSession::new();
/// mock.expect(Method::FriendsGet).return_ok(json!([1, 2]));
///
/// let session = mock.session();
/// // Hand `session` to a resource...
/// # let _ = session;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSession {
    state: Arc<Mutex<MockState>>,
}

impl MockSession {
    /// Creates a new mock session with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mock as a shared session handle.
    pub fn session(&self) -> Arc<dyn Session> {
        Arc::new(self.clone())
    }

    /// Expects one call to `method`.
    pub fn expect(&self, method: Method) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            state: self.state.clone(),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of calls received for `method`.
    pub fn call_count(&self, method: Method) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl Session for MockSession {
    async fn post(&self, method: Method, params: Params) -> Result<Value, SessionError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall { method, params });
        match state.expectations.pop_front() {
            Some(expectation) if expectation.method == method => expectation.response,
            Some(expectation) => panic!(
                "Unexpected call: expected {}, got {}",
                expectation.method, method
            ),
            None => panic!("Unexpected call with no expectation left: {}", method),
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: Method,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Sets the expectation to return a successful response.
    pub fn return_ok(self, value: Value) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: SessionError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, SessionError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            response,
        });
    }
}
