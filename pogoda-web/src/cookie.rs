//! Minimal `Cookie` / `Set-Cookie` header handling for the one cookie this
//! application uses.
//!
//! Cookie values must stay ASCII while city names are arbitrary script, so
//! values are percent-encoded on write and decoded on read.

/// Thirty days, the lifetime of the remembered city.
const MAX_AGE_SECS: u64 = 30 * 24 * 60 * 60;

/// Extract a cookie value from a `Cookie` request header.
pub fn read(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                // Decoded bytes that are not UTF-8: keep the raw value.
                .unwrap_or_else(|_| value.to_string())
        })
    })
}

/// Build the `Set-Cookie` header value for a remembered city.
///
/// `HttpOnly` keeps it away from scripts and `Secure` restricts it to HTTPS.
pub fn set(name: &str, value: &str) -> String {
    format!(
        "{name}={}; Max-Age={MAX_AGE_SECS}; Path=/; HttpOnly; Secure",
        urlencoding::encode(value)
    )
}
