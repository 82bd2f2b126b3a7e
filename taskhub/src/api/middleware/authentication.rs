use axum::{
    extract::{Request, State},
    http,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::api::error::AppError;
use crate::api::token::AuthError;
use crate::app_state::SharedAppState;

/// Token-verifier middleware.
///
/// Resolves the bearer credential to an identity and attaches it to the
/// request extensions. Missing or invalid credentials short-circuit with
/// 401 before any access decision or handler runs.
pub async fn authenticate(
    State(state): State<SharedAppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        warn!(
            "Missing Authorization header | {} {} | user_agent: {:?}",
            req.method(),
            req.uri(),
            req.headers()
                .get("user-agent")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("unknown")
        );
        return Err(AppError::Unauthenticated(AuthError::Unauthorized));
    };

    let identity = state.token_service.verify(auth_header).map_err(|err| {
        warn!(
            "Authentication failed for {} {}: {}",
            req.method(),
            req.uri(),
            err
        );
        AppError::Unauthenticated(err)
    })?;

    debug!(
        "Authenticated user {} with roles {:?}",
        identity.user_id, identity.roles
    );
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
