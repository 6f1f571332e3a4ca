use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared login used for every router.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            user: default_user(),
            password: String::new(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn default_user() -> String {
    std::env::var("USER").unwrap_or_default()
}
