//! Redirect token generation.

/// Random bytes per token; hex-encodes to 8 characters.
const TOKEN_LENGTH_BYTES: usize = 4;

/// Generates a random redirect token.
///
/// Uses `getrandom` for entropy and hex-encodes 4 random bytes into an
/// 8-character lowercase token (32 bits of entropy). Collisions are
/// handled by the caller's bounded retry against the link store.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}
