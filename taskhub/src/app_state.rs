use std::sync::Arc;

use taskhub_core::tasks::SharedTaskList;
use taskhub_core::users::SharedUserList;

use crate::api::router::protected_route_requirements;
use crate::api::token::TokenService;
use crate::notification::{log::LogMailer, Mailer};
use crate::services::AuthorizationService;
use crate::settings::config::Settings;
use crate::shutdown::{self, ShutdownSignal};

#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub shutdown: ShutdownSignal,
    pub tasks: SharedTaskList,
    pub users: SharedUserList,
    pub auth_service: Arc<AuthorizationService>,
    pub token_service: Arc<TokenService>,
    pub mailer: Arc<dyn Mailer>,
}

pub type SharedAppState = Arc<AppState>;

impl AppState {
    pub async fn new() -> anyhow::Result<SharedAppState> {
        let settings = Settings::new()?;

        let shutdown = ShutdownSignal::new();
        shutdown::listen_for_signals(&shutdown);

        Self::from_settings(settings, shutdown).await
    }

    /// Build state from already-loaded settings.
    ///
    /// Startup-time validation lives here: inconsistent rate-limit tiers or
    /// an endpoint requirement naming a role absent from the role table
    /// refuse to start the process instead of failing per request.
    pub async fn from_settings(
        settings: Settings,
        shutdown: ShutdownSignal,
    ) -> anyhow::Result<SharedAppState> {
        settings.api.rate_limiting.validate()?;

        let auth_service = Arc::new(AuthorizationService::new(&settings.roles));
        auth_service.validate_requirements(&protected_route_requirements())?;

        let token_service = Arc::new(TokenService::new(&settings.api.token));

        Ok(Arc::new(AppState {
            settings,
            shutdown,
            tasks: SharedTaskList::new(),
            users: SharedUserList::new(),
            auth_service,
            token_service,
            mailer: Arc::new(LogMailer::new()),
        }))
    }
}
