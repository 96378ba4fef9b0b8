//! Shared-secret gate in front of the admin views.
//!
//! One fixed password compared in plaintext, flipping a process-local flag.
//! This is a toy mechanism carried over from the original design, not a
//! security boundary; a deployment that matters must replace it with real
//! credential verification.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect password. Try again.")]
    IncorrectPassword,
}

/// Process-local login state for the admin surface.
#[derive(Debug, Clone)]
pub struct AdminGate {
    password: String,
    logged_in: bool,
}

impl AdminGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            logged_in: false,
        }
    }

    /// Compares the attempt against the configured secret and flips the
    /// logged-in flag on a match. Failures carry no lockout or retry limit.
    pub fn login(&mut self, attempt: &str) -> Result<(), AuthError> {
        if attempt == self.password {
            self.logged_in = true;
            Ok(())
        } else {
            Err(AuthError::IncorrectPassword)
        }
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_flips_flag_only_on_exact_match() {
        let mut gate = AdminGate::new("sesame");
        assert_eq!(gate.login("wrong"), Err(AuthError::IncorrectPassword));
        assert!(!gate.is_logged_in());

        gate.login("sesame").unwrap();
        assert!(gate.is_logged_in());

        gate.logout();
        assert!(!gate.is_logged_in());
    }
}
