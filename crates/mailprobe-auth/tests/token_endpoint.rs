//! Token acquisition tests against an in-process mock token endpoint

use std::sync::{Arc, Mutex};

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use mailprobe_auth::{AppCredentials, AuthError, TokenClient};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Deserialize)]
struct TokenForm {
    grant_type: String,
    client_id: String,
    client_secret: String,
    scope: String,
}

type Captured = Arc<Mutex<Option<(String, TokenForm)>>>;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn credentials() -> AppCredentials {
    AppCredentials {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        tenant_id: "tenant-id".to_string(),
    }
}

async fn issue_token(
    Path(tenant): Path<String>,
    State(captured): State<Captured>,
    Form(form): Form<TokenForm>,
) -> Json<Value> {
    *captured.lock().unwrap() = Some((tenant, form));
    Json(json!({
        "token_type": "Bearer",
        "expires_in": 3599,
        "access_token": "abc123",
    }))
}

#[tokio::test]
async fn acquire_posts_grant_form_and_returns_token() {
    let captured: Captured = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/{tenant}/oauth2/v2.0/token", post(issue_token))
        .with_state(captured.clone());
    let authority = serve(app).await;

    let token = TokenClient::with_authority(authority)
        .acquire(&credentials())
        .await
        .unwrap();

    assert_eq!(token.access_token, "abc123");
    assert_eq!(token.token_type.as_deref(), Some("Bearer"));
    assert_eq!(token.expires_in, Some(3599));

    let (tenant, form) = captured.lock().unwrap().clone().unwrap();
    assert_eq!(tenant, "tenant-id");
    assert_eq!(form.grant_type, "client_credentials");
    assert_eq!(form.client_id, "client-id");
    assert_eq!(form.client_secret, "client-secret");
    assert_eq!(form.scope, "https://graph.microsoft.com/.default");
}

#[tokio::test]
async fn non_success_status_surfaces_status_and_body() {
    let app = Router::new().route(
        "/{tenant}/oauth2/v2.0/token",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                "AADSTS7000215: Invalid client secret provided.",
            )
        }),
    );
    let authority = serve(app).await;

    let err = TokenClient::with_authority(authority)
        .acquire(&credentials())
        .await
        .unwrap_err();

    match err {
        AuthError::ApiError { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("AADSTS7000215"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_access_token_is_a_parse_error() {
    let app = Router::new().route(
        "/{tenant}/oauth2/v2.0/token",
        post(|| async { Json(json!({ "token_type": "Bearer" })) }),
    );
    let authority = serve(app).await;

    let err = TokenClient::with_authority(authority)
        .acquire(&credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::ParseError(_)), "got {err:?}");
}
