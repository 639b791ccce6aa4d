/// An authenticated workspace user. Identity is opaque to this component;
/// only the bearer token is consumed, when building the outbound request.
#[derive(Clone)]
pub struct AuthenticatedUser {
    pub access_token: String,
}

impl AuthenticatedUser {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl std::fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("access_token", &"***redacted***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let user = AuthenticatedUser::new("super-secret-token");
        let debug = format!("{user:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("***redacted***"));
    }
}
