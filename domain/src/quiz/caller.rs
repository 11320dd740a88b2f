//! Caller identity value object

/// Opaque identity attached by the hosting gateway.
///
/// The gateway has already verified the token; this type only records
/// that one is present. Its `Debug` output never shows the token.
#[derive(Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    token: String,
}

impl CallerIdentity {
    /// Try to create an identity, returning None if the token is blank
    pub fn try_new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self { token })
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for CallerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallerIdentity(..)")
    }
}
