//! In-process credential check against the reference store. Demo-grade on
//! purpose: a single fixed account, no lockout, no sessions.

use crate::error::{HubError, Result};
use crate::infrastructure::reference::ReferenceStore;

pub const AUTH_FAILURE_MESSAGE: &str = "Incorrect username or password. Please try again.";

/// Verifies the supplied credentials against the reference store. The failure
/// message is shown to the user verbatim and does not say which part was
/// wrong.
pub fn verify(reference: &ReferenceStore, username: &str, password: &str) -> Result<()> {
    let expected = reference.credentials();
    if username == expected.username && password == expected.password {
        Ok(())
    } else {
        Err(HubError::Auth(AUTH_FAILURE_MESSAGE.to_string()))
    }
}
