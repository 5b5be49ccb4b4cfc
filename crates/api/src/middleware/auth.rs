//! Acting-owner extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use daybook_core::error::CoreError;
use daybook_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The acting owner, resolved from a JWT Bearer token in the
/// `Authorization` header.
///
/// Every resource handler takes this as its first extractor and threads the
/// owner id explicitly into repository calls; there is no ambient
/// request-scoped owner state anywhere.
///
/// ```ignore
/// async fn my_handler(AuthOwner(owner_id): AuthOwner) -> AppResult<Json<()>> {
///     tracing::info!(owner_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthOwner(pub DbId);

impl FromRequestParts<AppState> for AuthOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthOwner(claims.sub))
    }
}
