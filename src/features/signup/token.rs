//! Bearer token extraction from the page URL. The token rides in a `token`
//! query parameter supplied by the hosting page; a missing parameter means
//! requests go out without an Authorization header, never an error.

/// Extracts the `token` query parameter from a raw query string. Empty values
/// count as absent so no blank Authorization header is ever sent.
pub(crate) fn token_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == "token")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Formats the Authorization header value for a bearer token.
pub(crate) fn authorization_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Reads the bearer token once at mount. An unreadable location degrades to
/// no token rather than an error.
#[cfg(target_arch = "wasm32")]
pub(crate) fn bearer_token() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    token_from_query(&search)
}
