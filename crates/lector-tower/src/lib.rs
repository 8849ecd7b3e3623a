//! Small tower helpers shared by the lector service crates.

use std::pin::Pin;

use futures::Future;

pub mod service;
#[cfg(any(test, feature = "test"))]
pub mod test;

/// Boxed future returned by the hand-written services in this workspace
pub type ResponseFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
