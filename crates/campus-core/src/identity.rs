use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::errors::CoreError;
use crate::ids::{PREFIX_USER, generate_id};

/// Signed-in user identity passed to operations that need a role.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

impl User {
    /// Build a local stand-in identity from an email and a role.
    ///
    /// The display name is the email's local part.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Random` if no ID can be generated.
    pub fn mock(email: &str, role: Role) -> Result<Self, CoreError> {
        let name = email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .map(String::from);
        Ok(Self {
            id: generate_id(PREFIX_USER)?,
            name,
            email: Some(email.to_string()),
            role,
        })
    }
}

/// Explicit session owned by the application: initialised at start, cleared
/// on logout, handed to whatever needs the current identity.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<User>,
}

impl SessionContext {
    /// An empty (signed-out) session.
    #[must_use]
    pub const fn new() -> Self {
        Self { user: None }
    }

    pub fn init(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        self.user = None;
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The signed-in user, or an error when the session is empty.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotAuthenticated` before `init` or after `clear`.
    pub fn require_user(&self) -> Result<&User, CoreError> {
        self.user.as_ref().ok_or(CoreError::NotAuthenticated)
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
