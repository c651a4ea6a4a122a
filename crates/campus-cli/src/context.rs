//! Per-invocation application state.

use std::sync::Arc;

use anyhow::Context;
use campus_config::CampusConfig;
use campus_core::clock::SystemClock;
use campus_core::identity::User;
use campus_store::CampusService;
use tracing::debug;

use crate::cli::GlobalFlags;

/// Loaded config plus a seeded service with the mock user signed in.
pub struct AppContext {
    pub config: CampusConfig,
    pub service: CampusService,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = CampusConfig::load_with_dotenv().context("failed to load configuration")?;
        Self::with_config(config, flags)
    }

    pub fn with_config(config: CampusConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let mut service =
            CampusService::seeded(Arc::new(SystemClock)).context("failed to load demo data")?;

        let role = flags.role.unwrap_or(config.general.default_role);
        let email = flags
            .email
            .clone()
            .unwrap_or_else(|| config.general.default_email.clone());
        let user = User::mock(&email, role)?;
        debug!(%email, %role, "signing in mock user");
        service.login(user);

        Ok(Self { config, service })
    }
}

#[cfg(test)]
mod tests {
    use campus_config::CampusConfig;
    use campus_core::enums::{EntityType, Role};
    use campus_store::StoreError;
    use campus_store::dynamic::ListOptions;

    use super::AppContext;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(role: Option<Role>, email: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            role,
            email: email.map(String::from),
        }
    }

    #[test]
    fn signs_in_configured_default_user() {
        let ctx = AppContext::with_config(CampusConfig::default(), &flags(None, None))
            .expect("context should build");
        let user = ctx.service.session().current_user().expect("signed in");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.email.as_deref(), Some("admin@campushub.local"));
        assert!(
            !ctx.service
                .list_values(EntityType::Student, &ListOptions::default())
                .expect("admin can list students")
                .is_empty()
        );
    }

    #[test]
    fn role_flag_limits_what_the_user_sees() {
        let ctx = AppContext::with_config(
            CampusConfig::default(),
            &flags(Some(Role::Parent), Some("pat@example.com")),
        )
        .expect("context should build");
        let err = ctx
            .service
            .list_values(EntityType::Salary, &ListOptions::default())
            .expect_err("parents cannot see salaries");
        assert!(matches!(err, StoreError::Forbidden { .. }));
        assert!(
            ctx.service
                .list_values(EntityType::Notice, &ListOptions::default())
                .is_ok()
        );
    }
}
