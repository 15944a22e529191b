use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::{json_error, AppError};
use crate::services::auth_provider::AuthError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CredentialsRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Response {
    // The allow-list gate runs before any upstream call.
    let Some(domain) = email_domain(&body.email) else {
        return AppError::validation("Invalid email address").into_response();
    };
    if !state.config().is_domain_allowed(domain) {
        return AppError::validation("Please use an official email ID").into_response();
    }

    match state.auth().signup(&body.email, &body.password).await {
        Ok(()) => Json(MessageResponse {
            message: "Signup successful. Please check your email to verify.",
        })
        .into_response(),
        Err(err) => auth_error_response(err, "signup"),
    }
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Response {
    match state.auth().login(&body.email, &body.password).await {
        Ok(token_body) => Json(token_body).into_response(),
        Err(err) => auth_error_response(err, "login"),
    }
}

fn auth_error_response(err: AuthError, operation: &str) -> Response {
    match err {
        AuthError::Upstream { status, message } => {
            json_error(status, "UPSTREAM_AUTH_ERROR", message).into_response()
        }
        err => {
            tracing::error!(error = %err, operation, "auth delegation failed");
            AppError::internal(err.to_string()).into_response()
        }
    }
}

fn email_domain(email: &str) -> Option<&str> {
    let (local, domain) = email.rsplit_once('@')?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return None;
    }
    Some(domain)
}
