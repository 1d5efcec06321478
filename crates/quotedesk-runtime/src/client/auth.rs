use quotedesk_core::{Registration, RegistrationError, RegistrationForm, validate_registration};
use quotedesk_types::Role;

use super::QuoteDesk;
use crate::{Error, Result};

/// Demo-credential login. Logging in only remembers a display name.
pub struct AuthOps<'a> {
    desk: &'a QuoteDesk,
}

impl<'a> AuthOps<'a> {
    pub(super) fn new(desk: &'a QuoteDesk) -> Self {
        Self { desk }
    }

    /// Check credentials for `role` and remember the email local part as the
    /// session name. Returns that name.
    pub fn login(&self, email: &str, password: &str, role: Role) -> Result<String> {
        let auth = &self.desk.config().auth;
        let expected = match role {
            Role::Contractor => &auth.contractor,
            Role::Client => &auth.client,
        };

        let email = email.trim();
        if email != expected.email || password.trim() != expected.password {
            tracing::info!(role = %role, "login rejected");
            return Err(Error::InvalidCredentials(role));
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        self.desk.sessions().set(role, &name)?;
        tracing::info!(role = %role, name = %name, "logged in");
        Ok(name)
    }

    pub fn logout(&self, role: Role) -> Result<()> {
        self.desk.sessions().clear(role)?;
        Ok(())
    }

    /// Logged-in name for `role`, or `None`.
    pub fn current(&self, role: Role) -> Result<Option<String>> {
        Ok(self.desk.sessions().get(role)?)
    }

    /// Validate a registration. Accounts are not stored; the caller sends
    /// the user on to log in with the demo credentials.
    pub fn register(
        &self,
        form: &RegistrationForm,
    ) -> std::result::Result<Registration, RegistrationError> {
        validate_registration(form)
    }
}
