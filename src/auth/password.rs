/// Cost factor used for every stored moderator hash.
pub const COST: u32 = 10;

/// Hash a password with bcrypt at [`COST`].
pub fn hash(password: &str) -> Result<String, String> {
    bcrypt::hash(password, COST).map_err(|e| format!("Hashing failed: {e}"))
}

/// Verify a password against a bcrypt hash.
pub fn verify(password: &str, hash: &str) -> Result<bool, String> {
    bcrypt::verify(password, hash).map_err(|e| format!("Invalid hash: {e}"))
}
