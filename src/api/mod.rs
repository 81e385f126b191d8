//! Service API Module
//!
//! The contract between the core services and the HTTP transport.
//!
//! ## Overview
//! Every operation returns a status-coded envelope rather than an HTTP error:
//! the transport always answers 200 and the `status` field inside the body
//! carries the outcome. "No results" is a success, never a failure.
//!
//! ## Submodules
//! - **`types`**: The request/response envelope and the status code enum.
//! - **`handlers`**: Axum request handlers wiring the transport to the
//!   indexing pipeline and the search executor.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
