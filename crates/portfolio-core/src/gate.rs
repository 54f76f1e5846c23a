use serde::{Deserialize, Serialize};

use crate::error::EditError;

/// Authoring state resolved once at the application root and handed to each
/// section when it mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionContext {
    authoring: bool,
}

impl SessionContext {
    pub const fn new(authoring: bool) -> Self {
        Self { authoring }
    }

    pub const fn authoring() -> Self {
        Self::new(true)
    }

    pub const fn read_only() -> Self {
        Self::new(false)
    }

    pub fn is_authoring(&self) -> bool {
        self.authoring
    }
}

/// A section's copy of the authoring flag, taken at mount and never refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionGate {
    authoring: bool,
}

impl SessionGate {
    pub fn mount(context: &SessionContext) -> Self {
        Self {
            authoring: context.is_authoring(),
        }
    }

    pub fn is_authoring(&self) -> bool {
        self.authoring
    }

    pub fn require(&self, section: &'static str) -> Result<(), EditError> {
        if self.authoring {
            Ok(())
        } else {
            Err(EditError::ReadOnly { section })
        }
    }
}
