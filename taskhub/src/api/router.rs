use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;

use utoipa::openapi::security::SecurityScheme;
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use taskhub_core::authorization::{role, RoleRequirement};
use taskhub_core::tasks::{
    CreateTaskRequest, Task, TaskDataVec, TaskPriority, TaskStatus, UpdateTaskRequest,
};
use taskhub_core::users::UserProfile;

use crate::api::handlers::auth::__path_login_handler;
use crate::api::handlers::auth::__path_logout_handler;
use crate::api::handlers::auth::__path_profile_handler;
use crate::api::handlers::auth::__path_register_handler;
use crate::api::handlers::health::__path_health_checker_handler;
use crate::api::handlers::tasks::create::__path_create_task_handler;
use crate::api::handlers::tasks::delete::__path_delete_task_handler;
use crate::api::handlers::tasks::list::__path_list_tasks_handler;
use crate::api::handlers::tasks::update::__path_update_task_handler;

use super::handlers::auth::{
    login_handler, logout_handler, profile_handler, register_handler, LoginRequest,
    RegisterRequest, TokenResponse,
};
use super::handlers::health::health_checker_handler;
use super::handlers::tasks::create::create_task_handler;
use super::handlers::tasks::delete::delete_task_handler;
use super::handlers::tasks::list::list_tasks_handler;
use super::handlers::tasks::update::update_task_handler;
use super::middleware::authentication::authenticate;
use super::middleware::authorization::require_roles;
use super::rate_limiting::{create_authenticated_limiter, create_public_auth_limiter};
use crate::app_state::SharedAppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_checker_handler,
        register_handler,
        login_handler,
        logout_handler,
        profile_handler,
        create_task_handler,
        list_tasks_handler,
        update_task_handler,
        delete_task_handler,
    ),
    components(
        schemas(
            RegisterRequest, LoginRequest, TokenResponse, UserProfile,
            Task, TaskDataVec, TaskPriority, TaskStatus,
            CreateTaskRequest, UpdateTaskRequest
        )
    ),
    tags(
        (name = "taskhub-service", description = "taskhub api")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap(); // components are registered by the derive above
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        )
    }
}

fn create_task_requirement() -> RoleRequirement {
    RoleRequirement::any_of([role::ADMIN, role::MANAGER])
}

fn read_task_requirement() -> RoleRequirement {
    RoleRequirement::any_of([role::ADMIN, role::MANAGER, role::USER])
}

fn update_task_requirement() -> RoleRequirement {
    RoleRequirement::any_of([role::ADMIN, role::MANAGER, role::USER])
}

fn delete_task_requirement() -> RoleRequirement {
    RoleRequirement::any_of([role::ADMIN])
}

/// Role requirements of every protected route.
///
/// Used at startup to reject configurations whose role table does not cover
/// them; a typo in a requirement is a configuration error, not a
/// per-request failure.
pub fn protected_route_requirements() -> Vec<RoleRequirement> {
    vec![
        create_task_requirement(),
        read_task_requirement(),
        update_task_requirement(),
        delete_task_requirement(),
    ]
}

pub struct ApiRoutes;

impl ApiRoutes {
    pub fn create(state: SharedAppState) -> Router {
        let api = ApiDoc::openapi();
        let rate_limiting = state.settings.api.rate_limiting.clone();

        // Task routes carry their role requirement as a per-method layer.
        let mut authenticated_router = Router::new()
            .route(
                "/api/v1/tasks",
                post(create_task_handler)
                    .layer(middleware::from_fn(require_roles(create_task_requirement())))
                    .merge(
                        get(list_tasks_handler)
                            .layer(middleware::from_fn(require_roles(read_task_requirement()))),
                    ),
            )
            .route(
                "/api/v1/tasks/{task_id}",
                put(update_task_handler)
                    .layer(middleware::from_fn(require_roles(update_task_requirement())))
                    .merge(
                        delete(delete_task_handler)
                            .layer(middleware::from_fn(require_roles(delete_task_requirement()))),
                    ),
            )
            // Profile and logout need a verified identity but no specific role
            .route("/api/v1/auth/profile", get(profile_handler))
            .route("/api/v1/auth/logout", post(logout_handler))
            // Apply the token verifier to all authenticated routes
            .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

        if rate_limiting.enabled && rate_limiting.authenticated.is_enabled() {
            authenticated_router = authenticated_router
                .layer(create_authenticated_limiter(&rate_limiting.authenticated));
        }

        let mut public_auth_router = Router::new()
            .route("/api/v1/auth/register", post(register_handler))
            .route("/api/v1/auth/login", post(login_handler));

        if rate_limiting.enabled && rate_limiting.public_auth.is_enabled() {
            public_auth_router =
                public_auth_router.layer(create_public_auth_limiter(&rate_limiting.public_auth));
        }

        let public_router = public_auth_router
            .route("/api/v1/health", get(health_checker_handler))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
            .merge(Redoc::with_url("/redoc", api.clone()))
            .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"));

        Router::new()
            .merge(authenticated_router)
            .merge(public_router)
            .with_state(state.clone())
    }
}
