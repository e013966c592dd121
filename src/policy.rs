//! What happens to a failure once it has been logged

use serde::{Deserialize, Serialize};

/// Disposition of an observed failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log and continue; the caller never sees the failure
    #[default]
    Suppress,
    /// Log and hand the failure back unchanged
    Forward,
}

impl ErrorPolicy {
    /// Resolve an already-logged failure according to the policy
    pub fn resolve<E>(self, err: E) -> Result<(), E> {
        match self {
            ErrorPolicy::Suppress => Ok(()),
            ErrorPolicy::Forward => Err(err),
        }
    }
}
