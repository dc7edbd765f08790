//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while validation and API handling live in
//! dedicated feature areas.

pub(crate) mod signup;
