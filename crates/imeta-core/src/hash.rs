use xxhash_rust::xxh64::xxh64;

use crate::types::Signature;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    let mut result = vec![b'0'; 11];
    let mut idx = result.len();
    while value > 0 {
        idx -= 1;
        result[idx] = BASE62_CHARS[(value % 62) as usize];
        value /= 62;
    }
    result.into_iter().map(char::from).collect()
}

/// Stable identifier of a member declaration.
///
/// fingerprint = base62(xxhash64(qualname + rendered signature))
pub fn member_fingerprint(qualname: &str, signature: Option<&Signature>) -> String {
    let rendered = signature.map(Signature::to_string).unwrap_or_default();
    let mut input = String::with_capacity(qualname.len() + rendered.len() + 1);
    input.push_str(qualname);
    input.push('\0');
    input.push_str(&rendered);
    base62_encode(xxh64(input.as_bytes(), 0))
}
