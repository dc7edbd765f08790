//! Mapping from settled HTTP responses to user-facing submission outcomes.
//! Unknown statuses and malformed error bodies degrade to the generic
//! outcome; nothing in this path may panic on server-provided input.

use serde::Deserialize;

const AUTH_ERROR_MESSAGE: &str = "Not authenticated to access this resource.";
const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again.";
const REJECTED_PASSWORD_MESSAGE: &str =
    "Sorry, the entered password is not allowed, please try a different one.";

/// Marker returned by the API inside the `errors` array when the password is
/// rejected server-side.
const NOT_ALLOWED: &str = "not_allowed";

/// Terminal result of one signup attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SubmissionOutcome {
    Success,
    AuthError,
    ServerError,
    RejectedPassword,
    GenericError,
}

/// Error body shape returned by the signup API on 400/422 responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

impl SubmissionOutcome {
    /// Maps a settled response to an outcome. The body is consulted only for
    /// 400/422 statuses; a missing or unparseable body falls back to the
    /// generic outcome.
    pub fn from_response(status: u16, body: Option<&str>) -> Self {
        match status {
            200..=299 => Self::Success,
            401 | 403 => Self::AuthError,
            500 => Self::ServerError,
            400 | 422 => {
                let rejected = body
                    .and_then(|text| serde_json::from_str::<ErrorBody>(text).ok())
                    .is_some_and(|parsed| parsed.errors.iter().any(|error| error == NOT_ALLOWED));

                if rejected {
                    Self::RejectedPassword
                } else {
                    Self::GenericError
                }
            }
            _ => Self::GenericError,
        }
    }

    /// User-facing message for the outcome; `None` for success.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Success => None,
            Self::AuthError => Some(AUTH_ERROR_MESSAGE),
            Self::ServerError | Self::GenericError => Some(GENERIC_ERROR_MESSAGE),
            Self::RejectedPassword => Some(REJECTED_PASSWORD_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SubmissionOutcome;

    #[test]
    fn success_statuses_carry_no_message() {
        let outcome = SubmissionOutcome::from_response(200, None);
        assert_eq!(outcome, SubmissionOutcome::Success);
        assert_eq!(outcome.message(), None);

        assert_eq!(
            SubmissionOutcome::from_response(201, Some("{}")),
            SubmissionOutcome::Success
        );
    }

    #[test]
    fn auth_statuses_map_to_auth_error() {
        for status in [401, 403] {
            let outcome = SubmissionOutcome::from_response(status, None);
            assert_eq!(outcome, SubmissionOutcome::AuthError);
            assert_eq!(
                outcome.message(),
                Some("Not authenticated to access this resource.")
            );
        }
    }

    #[test]
    fn internal_error_maps_to_server_error() {
        let outcome = SubmissionOutcome::from_response(500, None);
        assert_eq!(outcome, SubmissionOutcome::ServerError);
        assert_eq!(
            outcome.message(),
            Some("Something went wrong, please try again.")
        );
    }

    #[test]
    fn not_allowed_marker_maps_to_rejected_password() {
        let body = r#"{"errors":["not_allowed"]}"#;
        let outcome = SubmissionOutcome::from_response(422, Some(body));
        assert_eq!(outcome, SubmissionOutcome::RejectedPassword);
        assert_eq!(
            outcome.message(),
            Some("Sorry, the entered password is not allowed, please try a different one.")
        );

        let body = r#"{"errors":["too_common","not_allowed"]}"#;
        assert_eq!(
            SubmissionOutcome::from_response(400, Some(body)),
            SubmissionOutcome::RejectedPassword
        );
    }

    #[test]
    fn validation_statuses_without_marker_fall_back_to_generic() {
        assert_eq!(
            SubmissionOutcome::from_response(422, Some(r#"{"errors":["too_short"]}"#)),
            SubmissionOutcome::GenericError
        );
        assert_eq!(
            SubmissionOutcome::from_response(422, Some(r#"{"errors":[]}"#)),
            SubmissionOutcome::GenericError
        );
        assert_eq!(
            SubmissionOutcome::from_response(400, Some("{}")),
            SubmissionOutcome::GenericError
        );
    }

    #[test]
    fn malformed_bodies_fall_back_to_generic() {
        assert_eq!(
            SubmissionOutcome::from_response(422, Some("not json")),
            SubmissionOutcome::GenericError
        );
        assert_eq!(
            SubmissionOutcome::from_response(422, Some(r#"{"errors":"not_allowed"}"#)),
            SubmissionOutcome::GenericError
        );
        assert_eq!(
            SubmissionOutcome::from_response(422, None),
            SubmissionOutcome::GenericError
        );
    }

    #[test]
    fn unmapped_statuses_fall_back_to_generic() {
        for status in [301, 404, 418, 502, 503] {
            assert_eq!(
                SubmissionOutcome::from_response(status, None),
                SubmissionOutcome::GenericError
            );
        }
    }
}
