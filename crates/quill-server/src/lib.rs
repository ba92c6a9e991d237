//! Quill Server - JSON-RPC access to the Quill data service
//!
//! Requests name an operation, its arguments and an optional selection of
//! fields to return. Relations in the selection are resolved parent first.

pub mod executor;
pub mod operations;
pub mod record;
pub mod selection;
pub mod server;
pub mod transport;

#[cfg(feature = "http")]
pub mod http;

pub use executor::{ExecutionResult, Executor, FieldError};
pub use selection::{Field, Selection};
pub use server::QuillServer;

#[cfg(feature = "http")]
pub use http::{create_router, run_http_server};
