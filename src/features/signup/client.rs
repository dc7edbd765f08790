//! Client wrapper for the signup API endpoint. It centralizes header handling
//! and folds transport failures into the generic outcome, keeping status
//! mapping out of view code.

use super::{outcome::SubmissionOutcome, token, types::SignupRequest};
use crate::app_lib::{config::AppConfig, post_json};

/// Submits the signup payload once. The Authorization header is attached only
/// when a bearer token was found in the page URL; transport-level failures
/// (network, timeout) collapse into `GenericError`.
pub(crate) async fn signup(
    request: &SignupRequest,
    bearer_token: Option<&str>,
) -> SubmissionOutcome {
    let config = AppConfig::load();

    let mut headers = Vec::new();
    if let Some(token) = bearer_token {
        headers.push((
            "Authorization".to_string(),
            token::authorization_value(token),
        ));
    }

    match post_json(&config.signup_url, request, &headers).await {
        Ok(response) => SubmissionOutcome::from_response(response.status, response.body.as_deref()),
        Err(_) => SubmissionOutcome::GenericError,
    }
}
