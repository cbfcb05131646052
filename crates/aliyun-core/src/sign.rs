//! RPC request signature.
//!
//! Implements the provider's signed-query scheme: percent-encode every
//! parameter, sort the pairs bytewise, fold them into a canonical query
//! string, wrap that into `METHOD&%2F&<encoded query>`, and HMAC-SHA1 the
//! result with `access_key_secret + "&"` as the key. The signature is the
//! base64 of the digest and travels as the `Signature` query parameter.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Percent-encode a value the way the signature requires.
///
/// RFC 3986 unreserved characters (`A-Z a-z 0-9 - _ . ~`) stay literal,
/// space becomes `%20` (never `+`), and `*` becomes `%2A`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Build the sorted, encoded canonical query string from raw pairs.
#[must_use]
pub fn canonicalized_query(pairs: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let mut query = String::new();
    for (i, (k, v)) in encoded.iter().enumerate() {
        if i > 0 {
            query.push('&');
        }
        query.push_str(k);
        query.push('=');
        query.push_str(v);
    }
    query
}

/// Build the string that gets signed for the given HTTP method.
#[must_use]
pub fn string_to_sign(method: &str, pairs: &[(String, String)]) -> String {
    format!(
        "{method}&%2F&{}",
        percent_encode(&canonicalized_query(pairs))
    )
}

/// Compute the `Signature` parameter value.
#[must_use]
pub fn rpc_signature(method: &str, pairs: &[(String, String)], access_key_secret: &str) -> String {
    let to_sign = string_to_sign(method, pairs);
    let key = format!("{access_key_secret}&");
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(to_sign.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_percent_encode_unreserved() {
        assert_eq!(percent_encode("AZaz09-_.~"), "AZaz09-_.~");
    }

    #[test]
    fn test_percent_encode_specials() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("*"), "%2A");
        assert_eq!(percent_encode("/"), "%2F");
        assert_eq!(percent_encode("a=b&c"), "a%3Db%26c");
    }

    #[test]
    fn test_canonicalized_query_sorts_bytewise() {
        let query = canonicalized_query(&pairs(&[
            ("Timestamp", "2026-01-01T00:00:00Z"),
            ("Action", "DescribeInstances"),
            ("Format", "JSON"),
        ]));
        assert_eq!(
            query,
            "Action=DescribeInstances&Format=JSON&Timestamp=2026-01-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_string_to_sign_shape() {
        let to_sign = string_to_sign("GET", &pairs(&[("Action", "DescribeVpcs")]));
        assert!(to_sign.starts_with("GET&%2F&"));
        // The query separator itself is double-encoded.
        assert_eq!(to_sign, "GET&%2F&Action%3DDescribeVpcs");
    }

    #[test]
    fn test_signature_is_deterministic() {
        let p = pairs(&[("Action", "DescribeRegions"), ("Format", "JSON")]);
        let a = rpc_signature("GET", &p, "testsecret");
        let b = rpc_signature("GET", &p, "testsecret");
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_depends_on_secret_and_input() {
        let p = pairs(&[("Action", "DescribeRegions")]);
        let a = rpc_signature("GET", &p, "secret-a");
        let b = rpc_signature("GET", &p, "secret-b");
        assert_ne!(a, b);

        let c = rpc_signature("POST", &p, "secret-a");
        assert_ne!(a, c);
    }

    #[test]
    fn test_signature_is_base64_of_sha1_digest() {
        let sig = rpc_signature("GET", &pairs(&[("Action", "DescribeZones")]), "k");
        // 20-byte SHA-1 digest base64-encodes to 28 chars ending in '='.
        assert_eq!(sig.len(), 28);
        assert!(sig.ends_with('='));
        assert!(STANDARD.decode(&sig).is_ok());
    }

    #[test]
    fn test_parameter_order_does_not_matter() {
        let a = rpc_signature(
            "GET",
            &pairs(&[("Action", "DescribeVpcs"), ("RegionId", "cn-hangzhou")]),
            "k",
        );
        let b = rpc_signature(
            "GET",
            &pairs(&[("RegionId", "cn-hangzhou"), ("Action", "DescribeVpcs")]),
            "k",
        );
        assert_eq!(a, b);
    }
}
