// Bearer-token extractor and the tenant authorization gate
//
// authorize_org is the single place the tenant-isolation invariant lives.
// Every handler touching an org-scoped resource calls it; no route carries
// its own ad hoc comparison.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::sync::Arc;
use uuid::Uuid;
use watchpost_core::Claims;

use crate::auth::TokenService;
use crate::common::ApiError;

/// Verified user identity extracted from `Authorization: Bearer <token>`.
/// Rejection is always 401 with the uniform authentication-failure body,
/// whether the header is missing, malformed, tampered, or expired.
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let tokens = parts
            .extensions
            .get::<Arc<TokenService>>()
            .ok_or_else(|| anyhow::anyhow!("TokenService extension not installed"))?;

        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        let claims = tokens.verify(token).ok_or(ApiError::Unauthorized)?;
        Ok(AuthUser(claims))
    }
}

/// Tenant authorization gate: deny unless the authenticated organization
/// exactly matches the resource's organization. Role never widens access.
pub fn authorize_org(claims: &Claims, org_id: Uuid) -> Result<(), ApiError> {
    if claims.can_access_org(org_id) {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, extract::Path, http::Request, routing::get, Extension, Json, Router};
    use std::time::Duration;
    use tower::ServiceExt;
    use watchpost_core::Role;

    fn test_tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-secret", Duration::from_secs(3600)))
    }

    async fn protected(
        AuthUser(claims): AuthUser,
        Path(org_id): Path<Uuid>,
    ) -> Result<Json<serde_json::Value>, ApiError> {
        authorize_org(&claims, org_id)?;
        Ok(Json(serde_json::json!({ "org": org_id })))
    }

    fn test_app(tokens: Arc<TokenService>) -> Router {
        Router::new()
            .route("/orgs/:org_id/things", get(protected))
            .layer(Extension(tokens))
    }

    fn request(uri: &str, auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = auth {
            builder = builder.header("authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_401() {
        let app = test_app(test_tokens());
        let org = Uuid::now_v7();

        let response = app
            .oneshot(request(&format!("/orgs/{org}/things"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), 401);
    }

    #[tokio::test]
    async fn test_garbage_token_is_401() {
        let app = test_app(test_tokens());
        let org = Uuid::now_v7();

        let response = app
            .oneshot(request(
                &format!("/orgs/{org}/things"),
                Some("Bearer garbage"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), 401);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_401() {
        let app = test_app(test_tokens());
        let org = Uuid::now_v7();

        let response = app
            .oneshot(request(
                &format!("/orgs/{org}/things"),
                Some("Basic dXNlcjpwdw=="),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), 401);
    }

    #[tokio::test]
    async fn test_same_org_is_allowed() {
        let tokens = test_tokens();
        let app = test_app(tokens.clone());
        let org = Uuid::now_v7();
        let token = tokens.issue(Uuid::now_v7(), org, Role::Admin).unwrap();

        let response = app
            .oneshot(request(
                &format!("/orgs/{org}/things"),
                Some(&format!("Bearer {token}")),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_cross_org_is_403_regardless_of_role() {
        let tokens = test_tokens();
        let org_a = Uuid::now_v7();
        let org_b = Uuid::now_v7();

        for role in [Role::Admin, Role::Member] {
            let app = test_app(tokens.clone());
            let token = tokens.issue(Uuid::now_v7(), org_a, role).unwrap();

            let response = app
                .oneshot(request(
                    &format!("/orgs/{org_b}/things"),
                    Some(&format!("Bearer {token}")),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), 403);
        }
    }
}
