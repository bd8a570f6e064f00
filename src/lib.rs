//! Strand API client library.
//!
//! A Rust library for interacting with the Strand life-sciences REST API
//! using a schema-driven architecture: every resource kind is a declarative
//! [`Schema`] value (field list, nested-resource map, endpoint, list key),
//! and one generic engine performs JSON hydration and cursor pagination for
//! all of them.
//!
//! # Quick Start
//!
//! ```no_run
//! use strandapi::{StrandClient, DNA_SEQUENCE, FOLDER};
//!
//! #[tokio::main]
//! async fn main() -> strandapi::Result<()> {
//!     // Create client from environment variables
//!     let client = StrandClient::from_env()?;
//!
//!     // Fetch one sequence by id
//!     let seq = DNA_SEQUENCE.get(&client, "seq_VgkHvT2P").await?;
//!     println!(
//!         "{} ({} bp)",
//!         seq.as_str("name").unwrap_or("unnamed"),
//!         seq.as_i64("length").unwrap_or(0),
//!     );
//!
//!     // Nested resources hydrate recursively
//!     if let Some(creator) = seq.nested("creator") {
//!         println!("created by {}", creator.as_str("name").unwrap_or("?"));
//!     }
//!
//!     // Enumerate a collection across every page
//!     let folders = FOLDER.list_all(&client, &[]).await?;
//!     println!("Found {} folders", folders.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Two layers, strictly stacked:
//!
//! - [`StrandClient`] - the transport primitive: one authenticated GET,
//!   query-string serialization, JSON parsing, error classification.
//! - The resource engine - [`Schema::hydrate`] plus the network operations
//!   [`Schema::get`], [`Schema::list_page`], and [`Schema::list_all`],
//!   parameterized by the stock schema tables ([`DNA_SEQUENCE`], [`FOLDER`],
//!   [`PROJECT`], ...) or by schemas you declare yourself.
//!
//! Hydrated [`Record`]s are immutable snapshots; [`Record::reload`] fetches
//! a fresh one.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `STRAND_API_KEY` (required) - Your Strand API key, sent as the username
//!   half of HTTP Basic authentication
//! - `STRAND_API_URL` (optional) - Base URL (defaults to `https://app.strand.bio/api/v2`)

mod client;
mod entities;
mod error;
mod pagination;
mod resource;
mod schema;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::StrandClient;
pub use error::{Result, StrandError};
pub use pagination::Page;
pub use resource::DEFAULT_PAGE_SIZE;
pub use schema::{FieldValue, Record, Schema};

// Re-export the stock schema tables
pub use entities::{
    ANNOTATION, ARCHIVE_RECORD, DNA_SEQUENCE, FOLDER, ORGANIZATION_SUMMARY, PRIMER, PROJECT,
    TEAM_SUMMARY, TRANSLATION, USER_SUMMARY,
};
