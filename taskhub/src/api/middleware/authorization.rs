use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{debug, warn};

use taskhub_core::authorization::{authorize, AccessDecision, Identity, RoleRequirement};

use crate::api::error::AppError;

/// Middleware factory that creates a role-checking layer for one route.
///
/// The requirement is fixed at router construction; the check itself is the
/// pure any-of-roles decision over the identity the authentication
/// middleware attached. Denials short-circuit with 403 and never reach the
/// handler.
pub fn require_roles(
    requirement: RoleRequirement,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<
    Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>,
> + Clone {
    move |req: Request, next: Next| {
        let requirement = requirement.clone();
        Box::pin(async move {
            let Some(identity) = req.extensions().get::<Identity>().cloned() else {
                warn!("Identity not found in request extensions; is the authentication middleware installed?");
                return Err(AppError::InternalServerError(
                    "request context is missing an identity".to_string(),
                ));
            };

            match authorize(&identity, &requirement) {
                AccessDecision::Allow => {
                    debug!(
                        "Access granted: user {} satisfies {}",
                        identity.user_id, requirement
                    );
                    Ok(next.run(req).await)
                }
                AccessDecision::Deny(reason) => {
                    warn!(
                        "Access denied: user {} with roles {:?} does not satisfy {} ({:?})",
                        identity.user_id, identity.roles, requirement, reason
                    );
                    Err(AppError::Forbidden)
                }
            }
        })
    }
}
