use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Hex HMAC-SHA256 over `UPPER(method) + path + timestamp + body`.
///
/// The body string here must be byte-identical to the body actually sent;
/// re-serializing independently would let key order drift and break the
/// signature.
pub fn request_signature(
    secret: &str,
    path: &str,
    method: &str,
    timestamp: &str,
    body: Option<&str>,
) -> String {
    let mut sign_data = format!("{}{}{}", method.to_uppercase(), path, timestamp);
    if let Some(body) = body {
        sign_data.push_str(body);
    }

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(sign_data.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
