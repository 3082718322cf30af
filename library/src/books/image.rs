use url::form_urlencoded::byte_serialize;
use url::Url;
use crate::books::domain::model::PLACEHOLDER_IMAGE;

// Hosts serving catalog thumbnails; browsers reject some of them cross-origin.
const CATALOG_IMAGE_HOSTS: [&str; 2] = ["books.google.com", "books.googleusercontent.com"];
const PLACEHOLDER_HOST: &str = "via.placeholder.com";

// Upgrades thumbnails to https and routes catalog-hosted images through the proxy.
pub fn normalize_image_url(raw: &str, proxy: Option<&str>) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    if is_placeholder(raw) {
        return raw.to_string();
    }
    let secure = match raw.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => raw.to_string(),
    };
    match proxy {
        Some(proxy) if is_catalog_host(&secure) => {
            let encoded: String = byte_serialize(secure.as_bytes()).collect();
            format!("{}{}", proxy, encoded)
        }
        _ => secure,
    }
}

pub fn is_placeholder(raw: &str) -> bool {
    host_of(raw).map(|h| h == PLACEHOLDER_HOST).unwrap_or(false)
}

fn is_catalog_host(raw: &str) -> bool {
    host_of(raw)
        .map(|h| CATALOG_IMAGE_HOSTS.iter().any(|c| h == *c || h.ends_with(&format!(".{}", c))))
        .unwrap_or(false)
}

fn host_of(raw: &str) -> Option<String> {
    Url::parse(raw).ok().and_then(|u| u.host_str().map(str::to_lowercase))
}
