use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};

use crate::server::VerifyState;

#[derive(Serialize, Deserialize)]
pub struct Submission {
    code: String,
}

// axum handler for code verification; the submitted code never reaches the
// logs
#[instrument(skip_all)]
pub async fn verify(
    State(state): State<VerifyState>,
    payload: Option<Json<Submission>>,
) -> impl IntoResponse {
    let Some(Json(submission)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "valid": false, "message": "Missing payload" })),
        );
    };

    let matched = state
        .codes
        .iter()
        .any(|code| code.expose_secret() == submission.code);

    if matched {
        debug!("access code accepted");

        let mut body = json!({ "valid": true, "message": "Access granted" });
        if let Some(user) = &state.user {
            body["user"] = json!(user);
        }

        (StatusCode::OK, Json(body))
    } else {
        debug!("access code rejected");

        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "valid": false, "message": "Invalid access code" })),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::server::{router, VerifyState};
    use anyhow::Result;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use secrecy::SecretString;
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn test_state(user: Option<&str>) -> VerifyState {
        VerifyState::new(
            vec![SecretString::from("1234".to_string())],
            user.map(ToString::to_string),
        )
    }

    async fn post_code(state: VerifyState, body: &str) -> Result<(StatusCode, Value)> {
        let app = router(state);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))?,
            )
            .await?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    #[tokio::test]
    async fn matching_code_is_valid_with_user() -> Result<()> {
        let (status, body) = post_code(test_state(Some("alice")), r#"{"code":"1234"}"#).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["user"], "alice");
        assert_eq!(body["message"], "Access granted");
        Ok(())
    }

    #[tokio::test]
    async fn matching_code_without_user_label() -> Result<()> {
        let (status, body) = post_code(test_state(None), r#"{"code":"1234"}"#).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert!(body.get("user").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn wrong_code_is_unauthorized() -> Result<()> {
        let (status, body) = post_code(test_state(None), r#"{"code":"nope"}"#).await?;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["valid"], false);
        assert_eq!(body["message"], "Invalid access code");
        Ok(())
    }

    #[tokio::test]
    async fn missing_payload_is_bad_request() -> Result<()> {
        let app = router(test_state(None));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/verify")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn health_reports_build_info() -> Result<()> {
        let app = router(test_state(None));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("X-App"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
