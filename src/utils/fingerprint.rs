//! Caller fingerprinting for privacy-scrubbed click records.

use sha2::{Digest, Sha256};

/// Static salt mixed into the IP digest.
///
/// Not a secret: it only prevents reuse of digests computed elsewhere with
/// a different salt. Changing it changes dedup semantics for hashes already
/// stored, so it must stay stable across deployments.
pub const FINGERPRINT_SALT: &str = "referral-salt";

/// Number of hex characters kept from the digest.
const FINGERPRINT_LEN: usize = 16;

/// Fallback identifier when no client address is available.
const UNKNOWN_IP: &str = "unknown";

/// Extracts the client IP from an `X-Forwarded-For` header value.
///
/// Takes the first comma-separated element, trimmed. Absent headers and
/// empty elements fall back to `"unknown"`.
///
/// # Examples
///
/// ```
/// use referral_tracker::utils::fingerprint::client_ip;
///
/// assert_eq!(client_ip(Some("1.2.3.4, 5.6.7.8")), "1.2.3.4");
/// assert_eq!(client_ip(None), "unknown");
/// ```
pub fn client_ip(forwarded_for: Option<&str>) -> &str {
    match forwarded_for.and_then(|v| v.split(',').next()).map(str::trim) {
        Some(ip) if !ip.is_empty() => ip,
        _ => UNKNOWN_IP,
    }
}

/// Derives the stored fingerprint for a client IP.
///
/// Computes SHA-256 over `ip + FINGERPRINT_SALT`, renders it as lowercase
/// hex, and keeps the first 16 characters. The result is fixed-width and
/// non-reversible in practice, while stable enough for downstream dedup
/// and rate analysis.
pub fn ip_fingerprint(ip: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    hasher.update(FINGERPRINT_SALT.as_bytes());

    let digest = hex::encode(hasher.finalize());
    digest[..FINGERPRINT_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_ip_single_value() {
        assert_eq!(client_ip(Some("203.0.113.9")), "203.0.113.9");
    }

    #[test]
    fn test_client_ip_takes_first_of_chain() {
        assert_eq!(client_ip(Some("1.2.3.4, 5.6.7.8, 9.10.11.12")), "1.2.3.4");
    }

    #[test]
    fn test_client_ip_trims_whitespace() {
        assert_eq!(client_ip(Some("  1.2.3.4 , 5.6.7.8")), "1.2.3.4");
    }

    #[test]
    fn test_client_ip_missing_header() {
        assert_eq!(client_ip(None), "unknown");
    }

    #[test]
    fn test_client_ip_empty_value() {
        assert_eq!(client_ip(Some("")), "unknown");
        assert_eq!(client_ip(Some("   ")), "unknown");
        assert_eq!(client_ip(Some(" , 5.6.7.8")), "unknown");
    }

    #[test]
    fn test_fingerprint_shape() {
        let hash = ip_fingerprint("203.0.113.9");

        assert_eq!(hash.len(), 16);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fingerprint_known_values() {
        // SHA-256("1.2.3.4referral-salt") = 0aac3a9ad5c0334a...
        assert_eq!(ip_fingerprint("1.2.3.4"), "0aac3a9ad5c0334a");
        // SHA-256("unknownreferral-salt") = f313009d73097e48...
        assert_eq!(ip_fingerprint("unknown"), "f313009d73097e48");
    }

    #[test]
    fn test_fingerprint_deterministic() {
        assert_eq!(ip_fingerprint("192.0.2.1"), ip_fingerprint("192.0.2.1"));
    }

    #[test]
    fn test_fingerprint_differs_per_ip() {
        assert_ne!(ip_fingerprint("192.0.2.1"), ip_fingerprint("192.0.2.2"));
    }
}
