use rand::RngCore;
use rand::rngs::OsRng;

/// Bytes of entropy behind a session secret.
pub const SECRET_KEY_BYTES: usize = 32;

/// Fresh hex-encoded session secret from the OS random source.
pub fn generate_secret_key() -> String {
    let mut bytes = [0u8; SECRET_KEY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Whether `value` has the shape of a generated session secret.
pub fn is_secret_key(value: &str) -> bool {
    value.len() == SECRET_KEY_BYTES * 2 && value.bytes().all(|b| b.is_ascii_hexdigit())
}
