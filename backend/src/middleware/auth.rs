//! Identity gate middleware
//!
//! The platform trusts an external identity provider to authenticate users
//! and issue a bearer token carrying the caller's email. This middleware
//! verifies the token against the configured secret and checks the email
//! against the configured allow-list; everyone else is turned away from all
//! protected endpoints.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::config::AuthConfig;
use crate::error::AppError;
use crate::AppState;

/// Authenticated caller information extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
}

/// Identity gate middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let auth_user = authorize(&state.config.auth, auth_header)?;

    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Admission decision for one request: token verification plus the
/// allow-list check, driven entirely by the loaded configuration
pub fn authorize(auth: &AuthConfig, header: Option<&str>) -> Result<AuthUser, AppError> {
    let token = match header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return Err(AppError::Unauthorized(
                "Missing or invalid Authorization header".to_string(),
            ));
        }
    };

    let claims = decode_jwt(token, &auth.jwt_secret)?;

    if !auth.is_allowed(&claims.email) {
        return Err(AppError::Forbidden(
            "This account is not permitted to access the ledger".to_string(),
        ));
    }

    Ok(AuthUser {
        email: claims.email,
    })
}

/// Token claims issued by the identity provider
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Claims {
    sub: String,
    email: String,
    exp: i64,
    iat: i64,
}

/// Decode and validate the bearer token
fn decode_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken)
}

/// Extractor for the authenticated caller
/// Use this in handlers to get the current user
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn test_auth() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            allowed_emails: vec![
                "owner@example.com".to_string(),
                "manager@example.com".to_string(),
            ],
        }
    }

    fn bearer(email: &str, secret: &str) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "user-1".to_string(),
            email: email.to_string(),
            exp: now + 3600,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();
        format!("Bearer {}", token)
    }

    #[test]
    fn allowed_email_is_admitted() {
        let auth = test_auth();
        let header = bearer("owner@example.com", &auth.jwt_secret);
        let user = authorize(&auth, Some(&header)).unwrap();
        assert_eq!(user.email, "owner@example.com");
    }

    /// The admission decision follows the configured allow-list, so a list
    /// loaded from config files or environment takes effect per request
    #[test]
    fn allow_list_comes_from_config() {
        let mut auth = test_auth();
        let header = bearer("third@example.com", &auth.jwt_secret);
        assert!(matches!(
            authorize(&auth, Some(&header)),
            Err(AppError::Forbidden(_))
        ));

        auth.allowed_emails.push("third@example.com".to_string());
        assert!(authorize(&auth, Some(&header)).is_ok());
    }

    #[test]
    fn secret_comes_from_config() {
        let auth = test_auth();
        let header = bearer("owner@example.com", "some-other-secret");
        assert!(matches!(
            authorize(&auth, Some(&header)),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn missing_or_malformed_header_is_unauthorized() {
        let auth = test_auth();
        assert!(matches!(
            authorize(&auth, None),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            authorize(&auth, Some("Basic abc")),
            Err(AppError::Unauthorized(_))
        ));
    }
}
