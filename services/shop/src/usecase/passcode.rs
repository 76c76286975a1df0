use anyhow::Context as _;
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::RngExt;

use crate::domain::types::PASSCODE_LEN;
use crate::error::ShopServiceError;

/// Charset for generating passcodes (mixed-case alphanumeric, 62 symbols).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A freshly issued passcode. `plaintext` goes to the customer once; only
/// `hash` is stored.
pub struct IssuedPasscode {
    pub plaintext: String,
    pub hash: String,
}

pub fn generate_passcode() -> String {
    let mut rng = rand::rng();
    (0..PASSCODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Salted Argon2id PHC string.
pub fn hash_passcode(passcode: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(passcode.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// The stored hash is neither an Argon2 PHC string nor a bcrypt hash.
#[derive(Debug, thiserror::Error)]
#[error("stored passcode hash is unreadable")]
pub struct UnreadableHash;

/// Check `passcode` against a stored hash.
///
/// New rows carry Argon2 PHC strings. Rows written before the switch carry
/// bcrypt hashes (`$2a$`, `$2b$`, `$2y$`) and are still accepted.
pub fn verify_passcode(passcode: &str, hash: &str) -> Result<bool, UnreadableHash> {
    if hash.starts_with("$2") {
        return bcrypt::verify(passcode, hash).map_err(|_| UnreadableHash);
    }
    let parsed = PasswordHash::new(hash).map_err(|_| UnreadableHash)?;
    match Argon2::default().verify_password(passcode.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(_) => Err(UnreadableHash),
    }
}

/// Generate a passcode and hash it on the blocking pool.
pub async fn issue() -> Result<IssuedPasscode, ShopServiceError> {
    let plaintext = generate_passcode();
    let to_hash = plaintext.clone();
    let hash = tokio::task::spawn_blocking(move || hash_passcode(&to_hash))
        .await
        .context("join passcode hashing task")?
        .map_err(|e| anyhow::anyhow!("hash passcode: {e}"))?;
    Ok(IssuedPasscode { plaintext, hash })
}

/// Check a presented passcode on the blocking pool.
pub async fn verify(presented: &str, hash: &str) -> Result<bool, ShopServiceError> {
    let presented = presented.to_owned();
    let hash = hash.to_owned();
    let outcome = tokio::task::spawn_blocking(move || verify_passcode(&presented, &hash))
        .await
        .context("join passcode verification task")?;
    outcome.map_err(|_| ShopServiceError::UnreadablePasscodeHash)
}
