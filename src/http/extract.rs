//! Validating JSON extractor.
//!
//! Wraps [`axum::Json`] so that both deserialization rejections and field
//! constraint violations surface as [`AppError::Validation`], which renders
//! the plain-text 422 the demo advertises. Handlers using [`ValidatedJson`]
//! only ever see bodies that passed both steps.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::AppError;

/// Field-constraint check for request bodies.
pub trait ValidateBody {
    /// Returns one message per violated constraint.
    fn validate(&self) -> Result<(), Vec<String>>;
}

/// JSON extractor that also runs [`ValidateBody::validate`].
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateBody,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();

        let Json(body) = Json::<T>::from_request(req, state).await.map_err(
            |rejection: JsonRejection| AppError::Validation {
                path: path.clone(),
                issues: vec![rejection.body_text()],
            },
        )?;

        body.validate()
            .map_err(|issues| AppError::Validation { path, issues })?;

        Ok(ValidatedJson(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::dto::ValidationDemoRequest;
    use axum::body::Body;
    use axum::http::header;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/error-validation-error")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_conforming_body() {
        let req = json_request(r#"{"a": 12}"#);
        let ValidatedJson(body) =
            ValidatedJson::<ValidationDemoRequest>::from_request(req, &())
                .await
                .unwrap();
        assert_eq!(body.a, 12);
    }

    #[tokio::test]
    async fn test_rejects_constraint_violation() {
        let req = json_request(r#"{"a": 3}"#);
        let err = ValidatedJson::<ValidationDemoRequest>::from_request(req, &())
            .await
            .err()
            .unwrap();
        match err {
            AppError::Validation { path, issues } => {
                assert_eq!(path, "/error-validation-error");
                assert!(issues[0].contains("greater than or equal to 10"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let req = json_request("{");
        let err = ValidatedJson::<ValidationDemoRequest>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_rejects_missing_field() {
        let req = json_request(r#"{"b": 99}"#);
        let err = ValidatedJson::<ValidationDemoRequest>::from_request(req, &())
            .await
            .err()
            .unwrap();
        match err {
            AppError::Validation { issues, .. } => {
                assert!(!issues.is_empty());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
