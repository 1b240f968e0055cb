/// Opaque token identifying a pending account.
///
/// Whatever the route carries is accepted as-is; a missing token is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationToken(String);

impl ActivationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Build the token from an optional route parameter.
    pub fn from_route(segment: Option<String>) -> Self {
        segment.map(Self).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The token as a single percent-encoded path segment.
    pub fn as_path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl AsRef<str> for ActivationToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
