//! General application configuration.

use campus_core::enums::Role;
use serde::{Deserialize, Serialize};

fn default_school_name() -> String {
    "Campus Hub".to_string()
}

const fn default_role() -> Role {
    Role::Admin
}

fn default_email() -> String {
    "admin@campushub.local".to_string()
}

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Display name of the school.
    #[serde(default = "default_school_name")]
    pub school_name: String,

    /// Role the CLI signs in with when `--role` is not given.
    #[serde(default = "default_role")]
    pub default_role: Role,

    /// Email of the mock CLI user when `--email` is not given.
    #[serde(default = "default_email")]
    pub default_email: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            school_name: default_school_name(),
            default_role: default_role(),
            default_email: default_email(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.school_name, "Campus Hub");
        assert_eq!(config.default_role, Role::Admin);
        assert_eq!(config.default_email, "admin@campushub.local");
        assert_eq!(config.default_limit, 50);
    }
}
