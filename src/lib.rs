#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Social Graph
//!
//! > **Typed, lazily populated resources for a remote social-graph API.**
//!
//! This crate models a remote user: which attributes it has, how nested records in a
//! response become typed values, and which remote calls are made once and then served
//! from memory.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One schema, no generated accessors
//!
//! Every user attribute is a row in one table ([`user::Field`]): its wire name and the
//! conversion applied to raw values. The same ordered list is what the resource stores
//! and what it asks the remote side for. Nested records (locations, schools, jobs,
//! networks, status) are typed; everything else is kept as the raw JSON value.
//!
//! ### Memoize forever
//!
//! Relationship accessors (`friends`, `groups`, `notifications`, `albums`) hit the remote
//! side on first use and keep the answer for the lifetime of the instance. There is no
//! invalidation, and a seeded friends list is never overwritten.
//!
//! ## 🚀 Core Concepts
//!
//! ### The Session Seam
//! Resources never talk HTTP. They hold an `Arc<dyn Session>` and call
//! [`Session::post`](session::Session::post) with a [`Method`](session::Method) and params.
//! Transport failures come back untouched inside [`UserError::Session`](user::UserError::Session).
//!
//! ### Mocking: Testing without a Network
//! [`MockSession`](session::mock::MockSession) plays back scripted responses and records
//! every call, so tests can count remote round trips and inspect params.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Transport ([`session`])
//! - **Role**: The contract resources call through, plus the scripted mock.
//! - **Key items**: [`Session`](session::Session), [`Method`](session::Method),
//!   [`MockSession`](session::mock::MockSession).
//!
//! ### 2. The Records ([`model`])
//! - **Role**: Plain DTOs built from remote mappings via [`FromHash`](model::FromHash).
//! - **Key items**: [`Location`](model::Location), [`Group`](model::Group),
//!   [`Album`](model::Album), [`FeedItem`](model::FeedItem).
//!
//! ### 3. The Resource ([`user`])
//! - **Role**: The user itself: construction, field access, population, relationships.
//! - **Key items**: [`User`](user::User), [`Field`](user::Field), [`UserError`](user::UserError).
//!
//! ### 4. Observability ([`lifecycle`])
//! - **Key items**: [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use social_graph::session::{mock::MockSession, Method};
//! use social_graph::user::User;
//! use serde_json::json;
//!
//! # tokio_test();
//! # fn tokio_test() {
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mock = MockSession::new();
//! mock.expect(Method::FriendsGet).return_ok(json!(["2", 3]));
//!
//! let mut user = User::new("1", mock.session()).unwrap();
//! assert!(user.is_friends_with(&3u64).await.unwrap());
//! assert!(user.is_friends_with("2").await.unwrap()); // cached, no second call
//! mock.verify();
//! # });
//! # }
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod lifecycle;
pub mod model;
pub mod session;
pub mod user;
