//! Authentication — API key credentials.
//!
//! ## Security Model
//!
//! Every request authenticates with HTTP Basic, the account API key as
//! username and an empty password. The key lives in a private field and is
//! injected by the HTTP layer at request-build time; it is never exposed
//! via a public accessor and never logged — `Debug` prints a redacted
//! placeholder.

/// An Inkflow account API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key. Restricted to the HTTP layer.
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let key = ApiKey::new("supersecret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }
}
