use crate::error::MealError;
use crate::model::Credential;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Pulls the caller's credential from `Authorization: Bearer <token>`.
///
/// The token is taken as the owner id as-is; issuing and verifying tokens
/// happens in front of this service.
#[async_trait]
impl<S> FromRequestParts<S> for Credential
where
    S: Send + Sync,
{
    type Rejection = MealError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(MealError::Unauthorized)?;

        Ok(Credential::new(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<Credential, MealError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        Credential::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_bearer_token() {
        let credential = extract(Some("Bearer user-42")).await.unwrap();
        assert_eq!(credential.user_id, "user-42");
    }

    #[tokio::test]
    async fn test_missing_or_malformed() {
        assert!(matches!(extract(None).await, Err(MealError::Unauthorized)));
        assert!(matches!(extract(Some("Bearer ")).await, Err(MealError::Unauthorized)));
        assert!(matches!(extract(Some("Basic abc")).await, Err(MealError::Unauthorized)));
    }
}
