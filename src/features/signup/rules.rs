//! Client-side password acceptability rules. Every rule is evaluated on each
//! call so the unmet list always reflects the full current state of the
//! password, in a fixed display order.

/// Minimum password length enforced by the client for early UX feedback.
pub(crate) const MIN_PASSWORD_LENGTH: usize = 10;
/// Maximum password length accepted by the signup API.
pub(crate) const MAX_PASSWORD_LENGTH: usize = 24;

/// Returns the currently unmet password rules, in display order. The password
/// is acceptable iff the returned list is empty.
pub(crate) fn unmet_rules(password: &str) -> Vec<&'static str> {
    let length = password.chars().count();
    let mut unmet = Vec::new();

    if length < MIN_PASSWORD_LENGTH {
        unmet.push("Password must be at least 10 characters long");
    }
    if length > MAX_PASSWORD_LENGTH {
        unmet.push("Password must be at most 24 characters long");
    }
    if password.chars().any(char::is_whitespace) {
        unmet.push("Password cannot contain spaces");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        unmet.push("Password must contain at least one number");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        unmet.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        unmet.push("Password must contain at least one lowercase letter");
    }

    unmet
}

/// A password is valid when no rule is unmet.
pub(crate) fn password_valid(password: &str) -> bool {
    unmet_rules(password).is_empty()
}

/// A username is valid when its trimmed value is non-empty.
pub(crate) fn username_valid(username: &str) -> bool {
    !username.trim().is_empty()
}
