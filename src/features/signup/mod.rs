//! Signup feature covering password rules, the form state machine, bearer
//! token extraction, and the API client. It keeps credential handling out of
//! the UI and must avoid logging passwords or token material.
//!
//! Flow Overview: the form validates locally on every edit, gates submission
//! until both fields pass, then POSTs the credentials once and folds the
//! response status into a user-facing outcome.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod form;
pub(crate) mod outcome;
pub(crate) mod rules;
pub(crate) mod token;
pub(crate) mod types;
