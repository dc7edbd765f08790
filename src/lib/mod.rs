//! Shared frontend utilities for API access, configuration, and errors.
//!
//! The signup flow issues exactly one POST at a time: the form gates
//! submission locally, attaches the bearer token read from the page URL at
//! mount, and maps the response status to a user-facing outcome. Centralizing
//! the HTTP helper here keeps timeout and error behavior consistent. Callers
//! must avoid logging credentials or token material.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::post_json;
