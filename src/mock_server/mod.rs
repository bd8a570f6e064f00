//! Mock Strand API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Strand
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests and
//! implements real `nextToken` cursor pagination, enabling realistic workflow
//! testing.
//!
//! # Example
//!
//! ```ignore
//! use strandapi::mock_server::MockServer;
//! use strandapi::{StrandClient, DNA_SEQUENCE};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = StrandClient::new("test-key", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let seq = DNA_SEQUENCE.get(&client, "seq_VgkHvT2P").await.unwrap();
//!     assert_eq!(seq.as_str("name"), Some("pUC19"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
