use async_trait::async_trait;
use torii_shared::{Masked, User, UserRole};

/// Credential check for the sign-in flow.
///
/// Verification reports a plain boolean; a failed attempt is an expected
/// outcome, not an error.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> bool;

    /// Profile handed to the session on a successful sign-in
    async fn profile_for(&self, email: &str) -> Option<User>;
}

/// The hardcoded demo credential set.
///
/// The demo environment has no identity provider; a single in-memory
/// account stands in for the whole directory.
pub struct DemoCredentialVerifier {
    profile: User,
    password: String,
}

impl DemoCredentialVerifier {
    pub fn new(profile: User, password: String) -> Self {
        Self { profile, password }
    }

    pub fn demo_email(&self) -> &str {
        &self.profile.email
    }
}

impl Default for DemoCredentialVerifier {
    fn default() -> Self {
        let mut profile = User::new(
            "Demo Buyer".to_string(),
            "demo@torii.example".to_string(),
            UserRole::Buyer,
        );
        profile.avatar = Some("https://img.torii.example/avatars/demo.png".to_string());
        profile.location = Some("Seattle, WA".to_string());

        Self::new(profile, "torii-demo".to_string())
    }
}

#[async_trait]
impl CredentialVerifier for DemoCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> bool {
        let ok = email.eq_ignore_ascii_case(&self.profile.email) && password == self.password;
        tracing::info!(email = %Masked(email.to_string()), ok, "credential check");
        ok
    }

    async fn profile_for(&self, email: &str) -> Option<User> {
        if email.eq_ignore_ascii_case(&self.profile.email) {
            Some(self.profile.clone())
        } else {
            None
        }
    }
}
