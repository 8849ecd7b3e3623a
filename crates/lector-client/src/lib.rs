// #![deny(missing_docs)]

//! GraphQL operations for a reader's history, profile and digest settings.
//!
//! Every operation lives under [`operations`] and is issued through a
//! [`LectorClient`]. All of them fail with
//! [`LectorClientError::RequestFailed`] when the transport or the server
//! rejects the request.

mod client;
mod error;

/// Module related to constructing request headers.
pub mod headers;

/// GraphQL operations, grouped by the feature they belong to
pub mod operations;

pub mod pager;

/// Types and fragments shared across operations
pub mod shared;

pub use client::LectorClient;
pub use error::{FailureReason, LectorClientError};
