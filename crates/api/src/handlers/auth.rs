//! Handlers for the `/auth` resource (login, signup, logout, password reset).

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use spacetour_core::error::CoreError;
use spacetour_core::session::SessionUser;
use validator::Validate;

use crate::auth::cookies::{self, ACCESS_TOKEN_COOKIE};
use crate::auth::identity::SignUpOutcome;
use crate::error::{AppError, AppResult};
use crate::response::{AuthResult, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login` and `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for `POST /auth/reset-password`.
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: SessionUser,
}

#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    /// `true` when the user must follow the emailed link before signing in.
    pub confirmation_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/login
///
/// Sign in with email + password and store the session in cookies.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let session = state
        .identity
        .sign_in_with_password(&input.email, &input.password)
        .await?;
    tracing::info!(user_id = %session.user.id, "User logged in");

    let set_cookies = cookies::session_cookies(&session, state.cookie_settings());
    Ok((
        cookies::append(set_cookies),
        Json(DataResponse {
            data: LoginResponse { user: session.user },
        }),
    ))
}

/// POST /auth/signup
///
/// Register a user. The confirmation link points at `{SITE_URL}/auth/callback`.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let redirect_to = format!("{}/auth/callback", state.config.site_url);
    let outcome = state
        .identity
        .sign_up(&input.email, &input.password, &redirect_to)
        .await?;

    let (set_cookies, response) = match outcome {
        SignUpOutcome::SignedIn(session) => {
            tracing::info!(user_id = %session.user.id, "User signed up and signed in");
            (
                cookies::session_cookies(&session, state.cookie_settings()),
                SignUpResponse {
                    confirmation_required: false,
                    user: Some(session.user),
                },
            )
        }
        SignUpOutcome::ConfirmationRequired => {
            tracing::info!("User signed up, confirmation email sent");
            (
                Vec::new(),
                SignUpResponse {
                    confirmation_required: true,
                    user: None,
                },
            )
        }
    };

    Ok((
        cookies::append(set_cookies),
        Json(DataResponse { data: response }),
    ))
}

/// POST /auth/logout
///
/// Revoke the session upstream (best-effort) and clear the session cookies.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = cookies::read_cookie(&headers, ACCESS_TOKEN_COOKIE) {
        if let Err(e) = state.identity.sign_out(&token).await {
            tracing::warn!(error = %e, "Upstream sign-out failed, clearing cookies anyway");
        }
    }

    (
        cookies::append(cookies::clear_session_cookies(state.cookie_settings())),
        Json(AuthResult::ok()),
    )
}

/// POST /auth/reset-password
///
/// Send a password reset email linking to `{SITE_URL}/reset-password`.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    validate_input(&input)?;

    let redirect_to = format!("{}/reset-password", state.config.site_url);
    state
        .identity
        .reset_password_for_email(&input.email, &redirect_to)
        .await?;

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: "Password reset instructions have been sent to your email",
        },
    }))
}

/// Run `validator` rules and report every failing field in one message.
fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input.validate().map_err(|errors| {
        let mut messages: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"));
                    (field.to_string(), message)
                })
            })
            .collect();
        messages.sort();

        let joined = messages
            .into_iter()
            .map(|(_, message)| message)
            .collect::<Vec<_>>()
            .join("; ");
        AppError::Core(CoreError::Validation(joined))
    })
}
