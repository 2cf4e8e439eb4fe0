//! Session identity used to attribute outgoing messages.

/// Sender recorded when no session identity is available.
pub const FALLBACK_SENDER: &str = "yo";

/// Supplies the identity of the signed-in user, if any.
pub trait IdentityProvider {
    fn current_user(&self) -> Option<String>;
}

/// Identity fixed at construction (from config or a CLI flag).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity(Option<String>);

impl StaticIdentity {
    pub fn new(user: impl Into<String>) -> Self {
        Self(Some(user.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl From<Option<String>> for StaticIdentity {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Resolves the sender name; blank identities fall back to `"yo"`.
pub fn resolve_sender(identity: &dyn IdentityProvider) -> String {
    identity
        .current_user()
        .map(|user| user.trim().to_string())
        .filter(|user| !user.is_empty())
        .unwrap_or_else(|| FALLBACK_SENDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::{resolve_sender, StaticIdentity, FALLBACK_SENDER};

    #[test]
    fn anonymous_and_blank_sessions_use_fallback() {
        assert_eq!(resolve_sender(&StaticIdentity::anonymous()), FALLBACK_SENDER);
        assert_eq!(resolve_sender(&StaticIdentity::new("   ")), FALLBACK_SENDER);
    }

    #[test]
    fn named_session_is_used_as_sender() {
        assert_eq!(resolve_sender(&StaticIdentity::new("maria")), "maria");
    }
}
