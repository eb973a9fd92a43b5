use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use tracing::error;

use crate::error::{AppError, AppResult};

lazy_static! {
    /// Stand-in hash checked when the username is unknown, so both login failures cost one
    /// argon2 verification.
    static ref DUMMY_HASH: String = hash_password("newsgate-dummy-password").unwrap_or_default();
}

fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| anyhow::anyhow!("argon2 hash: {e}"))
}

fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("argon2 parse hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// Hash `plain` on the blocking pool.
pub async fn hash(plain: &str) -> AppResult<String> {
    let plain = plain.to_owned();
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| AppError::Internal(format!("hash task: {e}")))?
        .map_err(|e| {
            error!(error = %e, "hash_password failed");
            AppError::Internal(e.to_string())
        })
}

/// Check `plain` against `stored` on the blocking pool. With no stored hash the dummy hash is
/// verified instead and the result is always `false`. An unreadable stored hash counts as a
/// mismatch.
pub async fn verify(plain: &str, stored: Option<String>) -> AppResult<bool> {
    let plain = plain.to_owned();
    tokio::task::spawn_blocking(move || match stored {
        Some(hash) => verify_password(&plain, &hash).unwrap_or_else(|e| {
            error!(error = %e, "stored hash unreadable");
            false
        }),
        None => {
            let _ = verify_password(&plain, &DUMMY_HASH);
            false
        }
    })
    .await
    .map_err(|e| AppError::Internal(format!("verify task: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_verifies_against_same_password() {
        let stored = hash("correct").await.expect("hashing should succeed");
        assert!(stored.starts_with("$argon2"));
        assert!(verify("correct", Some(stored)).await.unwrap());
    }

    #[tokio::test]
    async fn verify_rejects_wrong_password() {
        let stored = hash("correct").await.unwrap();
        assert!(!verify("wrong", Some(stored)).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_gets_distinct_salts() {
        assert_ne!(hash("correct").await.unwrap(), hash("correct").await.unwrap());
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_a_mismatch() {
        assert!(!verify("anything", Some("not-a-valid-hash".into())).await.unwrap());
        assert!(verify_password("anything", "not-a-valid-hash").is_err());
    }

    #[tokio::test]
    async fn missing_user_still_runs_a_real_verification() {
        assert!(PasswordHash::new(&DUMMY_HASH).is_ok());
        assert!(!verify("newsgate-dummy-password", None).await.unwrap());
    }
}
