use axum::extract::FromRef;
use tracing::{error, info, instrument, warn};

use super::{
    claims::Claims,
    jwt::JwtKeys,
    password as hasher,
};
use crate::{
    error::{AppError, AppResult},
    state::AppState,
    store::StoreError,
};

fn require_credentials(username: &str, password: &str) -> AppResult<()> {
    if username.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".into(),
        ));
    }
    Ok(())
}

#[instrument(skip(state, password))]
pub async fn register(state: &AppState, username: &str, password: &str) -> AppResult<()> {
    let username = username.trim();
    require_credentials(username, password)?;

    let hash = hasher::hash(password).await?;

    match state.users.create(username, &hash).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "user registered");
            Ok(())
        }
        Err(StoreError::Duplicate) => {
            warn!(username, "username already registered");
            Err(AppError::DuplicateUser)
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            Err(AppError::RegistrationFailed(e))
        }
    }
}

/// Unknown username and wrong password both yield `InvalidCredentials`.
#[instrument(skip(state, password))]
pub async fn login(state: &AppState, username: &str, password: &str) -> AppResult<String> {
    let username = username.trim();
    require_credentials(username, password)?;

    let user = state.users.find_by_username(username).await?;
    let stored = user.as_ref().map(|u| u.password_hash.clone());
    let ok = hasher::verify(password, stored).await?;

    let user = match user {
        Some(u) if ok => u,
        Some(u) => {
            warn!(user_id = %u.id, "login invalid password");
            return Err(AppError::InvalidCredentials);
        }
        None => {
            warn!(username, "login unknown username");
            return Err(AppError::InvalidCredentials);
        }
    };

    let keys = JwtKeys::from_ref(state);
    let token = keys
        .sign(&user)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!(user_id = %user.id, "user logged in");
    Ok(token)
}

pub fn authorize(keys: &JwtKeys, token: Option<&str>) -> AppResult<Claims> {
    let token = match token.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AppError::MissingToken),
    };
    keys.verify(token).map_err(|e| {
        warn!(error = %e, "invalid or expired token");
        AppError::InvalidToken
    })
}
