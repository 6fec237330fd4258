use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// One-way hash for storage at signup.
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    hash(plain, DEFAULT_COST)
}

/// Compare a login attempt against the stored hash.
///
/// Internal verify errors (e.g. a malformed stored hash) are logged and
/// reported as a mismatch so the caller's response stays the uniform
/// "Invalid credentials" in every failure case.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    match verify(plain, hashed) {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!("Password verification error: {}", e);
            false
        }
    }
}
