//! # lunar-api - Backend REST client
//!
//! Talks to the Lunar functions backend: authentication, function CRUD,
//! versions and diffs, executions and their logs, and ad-hoc invocation.
//!
//! Every call is a single attempt with no retry, backoff or caching. Failures
//! are normalized into [`ApiError`] at this boundary so the application layer
//! never has to look inside response bodies.
//!
//! ## Public API
//! - [`ApiClient`] - reqwest-backed client with a session cookie store
//! - [`Backend`] - trait over every backend operation (implemented by `ApiClient`)
//! - [`ApiError`] - normalized failure (network, decode, validation, status)
//! - [`NewFunction`], [`FunctionPatch`], [`InvokeRequest`], [`InvokeResponse`]

pub mod backend;
pub mod client;
pub mod error;
pub mod requests;

pub use backend::{Backend, LocalBackend};
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use requests::{FunctionPatch, HttpMethod, InvokeRequest, InvokeResponse, NewFunction};

/// Header the backend sets on invocation responses to link the execution record
pub const EXECUTION_ID_HEADER: &str = "x-execution-id";
