//! Request payload types for the signup API. These carry credentials and must
//! never be logged.

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub(crate) struct SignupRequest {
    pub username: String,
    pub password: String,
}
