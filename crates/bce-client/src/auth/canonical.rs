//! Canonical request components for the BCE v1 signature scheme.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

/// Header names signed when the caller does not name an explicit set.
/// Headers prefixed `x-bce-` are always signed on top of these.
pub static DEFAULT_HEADERS_TO_SIGN: Lazy<BTreeSet<String>> = Lazy::new(|| {
    ["host", "content-md5", "content-length", "content-type"]
        .into_iter()
        .map(String::from)
        .collect()
});

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// Percent-encode over the raw UTF-8 bytes. The unreserved set is the one
/// the signature scheme fixes; `keep_slash` is used for URI paths.
pub fn uri_encode(input: &str, keep_slash: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) || (keep_slash && byte == b'/') {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX_UPPER[(byte >> 4) as usize] as char);
            out.push(HEX_UPPER[(byte & 0x0f) as usize] as char);
        }
    }
    out
}

/// Encoded request path with a guaranteed leading `/`.
pub fn canonical_uri(path: &str) -> String {
    if path.starts_with('/') {
        uri_encode(path, true)
    } else {
        format!("/{}", uri_encode(path, true))
    }
}

/// Sorted `k=v` pairs, both sides encoded. The `authorization` parameter is
/// excluded from the signature; empty values keep their trailing `=`.
pub fn canonical_query(params: &[(String, String)]) -> String {
    let mut pairs: Vec<String> = params
        .iter()
        .filter(|(key, _)| !key.eq_ignore_ascii_case("authorization"))
        .map(|(key, value)| format!("{}={}", uri_encode(key, false), uri_encode(value, false)))
        .collect();
    pairs.sort();
    pairs.join("&")
}

/// Sorted `name:value` entries for every header that participates in the
/// signature. Empty values are skipped, names are lowercased, both sides
/// are encoded.
pub fn canonical_headers(
    headers: &[(String, String)],
    headers_to_sign: Option<&BTreeSet<String>>,
) -> String {
    let to_sign = headers_to_sign.unwrap_or(&DEFAULT_HEADERS_TO_SIGN);

    let mut entries: Vec<String> = headers
        .iter()
        .filter_map(|(name, value)| {
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            if to_sign.contains(&name) || name.starts_with("x-bce-") {
                Some(format!(
                    "{}:{}",
                    uri_encode(&name, false),
                    uri_encode(value, false)
                ))
            } else {
                None
            }
        })
        .collect();
    entries.sort();
    entries.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn encoding_keeps_unreserved_bytes() {
        assert_eq!(uri_encode("AZaz09-._~", false), "AZaz09-._~");
        assert_eq!(uri_encode("a b/c", false), "a%20b%2Fc");
        assert_eq!(uri_encode("a b/c", true), "a%20b/c");
    }

    #[test]
    fn encoding_is_uppercase_hex_over_utf8() {
        assert_eq!(uri_encode("中", false), "%E4%B8%AD");
        assert_eq!(uri_encode("2024-04-09T06:11:05Z", false), "2024-04-09T06%3A11%3A05Z");
    }

    #[test]
    fn canonical_uri_adds_leading_slash() {
        assert_eq!(canonical_uri("v1/instance"), "/v1/instance");
        assert_eq!(canonical_uri("/v1/job chain"), "/v1/job%20chain");
    }

    #[test]
    fn canonical_query_sorts_and_keeps_empty_values() {
        let params = pairs(&[("pageSize", "100"), ("attach", ""), ("pageNo", "1")]);
        assert_eq!(canonical_query(&params), "attach=&pageNo=1&pageSize=100");
    }

    #[test]
    fn canonical_query_skips_authorization() {
        let params = pairs(&[("Authorization", "bce-auth-v1/..."), ("marker", "m0")]);
        assert_eq!(canonical_query(&params), "marker=m0");
    }

    #[test]
    fn canonical_headers_default_set_plus_bce_prefix() {
        let headers = pairs(&[
            ("Host", "aihc.bj.baidubce.com"),
            ("Content-Type", "application/json"),
            ("Content-Length", "112"),
            ("x-bce-date", "2024-04-09T06:11:05Z"),
            ("User-Agent", "ignored"),
        ]);
        assert_eq!(
            canonical_headers(&headers, None),
            "content-length:112\n\
             content-type:application%2Fjson\n\
             host:aihc.bj.baidubce.com\n\
             x-bce-date:2024-04-09T06%3A11%3A05Z"
        );
    }

    #[test]
    fn canonical_headers_skips_empty_values() {
        let headers = pairs(&[("Host", "dns.baidubce.com"), ("Content-MD5", "  ")]);
        assert_eq!(canonical_headers(&headers, None), "host:dns.baidubce.com");
    }
}
