use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser},
        jwt::JwtKeys,
        password::verify_password,
    },
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        warn!("login rejected: missing email or password");
        return Err(ApiError::Validation(
            "email y password son obligatorios".into(),
        ));
    };

    // Unknown email and wrong password must be indistinguishable.
    let invalid = || ApiError::Auth("Credenciales inválidas".into());

    let Some(user) = state.users.find_by_email(&email) else {
        warn!("login with unknown email");
        return Err(invalid());
    };

    if !verify_password(&password, &user.password_hash)? {
        warn!(user_id = user.id, "login with invalid password");
        return Err(invalid());
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email)?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(AuthResponse {
        message: "Login exitoso".into(),
        token,
        user: PublicUser {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        },
    }))
}
