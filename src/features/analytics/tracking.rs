use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

/// Path prefixes that never count as a visit
const SKIPPED_PREFIXES: &[&str] = &[
    "/admin", "/api", "/_next", "/assets", "/favicon", "/robots", "/sitemap",
];

const UNKNOWN_CLIENT: &str = "unknown";

/// Path component of a page URL; absolute URLs lose scheme, host and query
pub fn page_path(page_url: &str) -> &str {
    let without_origin = match page_url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
        None => page_url,
    };
    without_origin
        .split(['?', '#'])
        .next()
        .unwrap_or(without_origin)
}

pub fn should_track(page_url: &str) -> bool {
    let path = page_path(page_url);
    !SKIPPED_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Client address: first `X-Forwarded-For` hop, then `X-Real-IP`
pub fn client_ip(headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded
        .or_else(real_ip)
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}

/// Stable anonymous visitor id derived from the client address
pub fn visitor_id(ip: &str) -> String {
    hex::encode(Sha256::digest(ip.as_bytes()))
}
