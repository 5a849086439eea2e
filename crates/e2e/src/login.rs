//! Page object for the sign-in view

use tracing::debug;

use crate::error::{E2eError, E2eResult};
use crate::fixtures::Credentials;
use crate::selectors::SelectorTemplate;
use crate::session::Session;

pub const USERNAME_FIELD: SelectorTemplate = SelectorTemplate::css("#username");
pub const PASSWORD_FIELD: SelectorTemplate = SelectorTemplate::css("#password");
pub const SUBMIT_BUTTON: SelectorTemplate =
    SelectorTemplate::xpath("//button[contains(., 'Sign in')]");

/// Page object for the login form.
///
/// Construction is infallible; call [`LoginPage::validate`] before use to
/// fail fast when the page did not actually load.
pub struct LoginPage<'a> {
    session: &'a dyn Session,
}

impl<'a> LoginPage<'a> {
    pub fn new(session: &'a dyn Session) -> Self {
        Self { session }
    }

    /// Check that the username field is present.
    pub async fn validate(&self) -> E2eResult<()> {
        let selector = USERNAME_FIELD.selector();
        if self.session.locator(&selector).is_present().await? {
            Ok(())
        } else {
            Err(E2eError::Validation {
                page: "login",
                selector: selector.to_string(),
            })
        }
    }

    /// Sign in with the injected credentials.
    pub async fn login(&self, credentials: &Credentials) -> E2eResult<()> {
        self.login_with(None, None, credentials).await
    }

    /// Sign in, overriding either credential field. `None` falls back to
    /// the corresponding injected value.
    ///
    /// A missing field propagates as [`E2eError::LocatorNotFound`] and
    /// aborts the scenario.
    pub async fn login_with(
        &self,
        username: Option<&str>,
        password: Option<&str>,
        credentials: &Credentials,
    ) -> E2eResult<()> {
        let username = username.unwrap_or(&credentials.username);
        debug!(username, "signing in");

        self.session
            .locator(&USERNAME_FIELD.selector())
            .fill(username)
            .await?;
        self.session
            .locator(&PASSWORD_FIELD.selector())
            .fill(password.unwrap_or(&credentials.password))
            .await?;

        self.session.locator(&SUBMIT_BUTTON.selector()).click().await
    }
}
