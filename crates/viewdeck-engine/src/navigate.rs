use viewdeck_types::{PUBLISHED_DOCUMENTS_TILE, ViewDescriptor, WORKING_DOCUMENT_TILE};

/// Navigation target for a view: prefer the full url, fall back to the
/// server-relative one, and absolutize relative paths against the site's
/// scheme and host. Summary tiles carry no url and yield None.
pub fn navigation_target(site_url: &str, descriptor: &ViewDescriptor) -> Option<String> {
    let raw = descriptor
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .or(descriptor.server_relative_url.as_deref().filter(|u| !u.is_empty()))?;

    if raw.starts_with("http") {
        return Some(raw.to_string());
    }

    let relative = raw.strip_prefix('/').unwrap_or(raw);
    Some(format!("{}/{}", site_root(site_url), relative))
}

/// Library landing page behind a summary tile.
pub fn summary_tile_target(site_url: &str, tile_id: &str) -> Option<String> {
    let site = site_url.trim_end_matches('/');
    match tile_id {
        WORKING_DOCUMENT_TILE => Some(format!("{}/Working Document", site)),
        PUBLISHED_DOCUMENTS_TILE => Some(format!("{}/Published Documents", site)),
        _ => None,
    }
}

/// Scheme plus host of a site url, without the site path.
fn site_root(site_url: &str) -> String {
    let site = site_url.trim_end_matches('/');
    if let Some(scheme_end) = site.find("://") {
        let after_scheme = &site[scheme_end + 3..];
        if let Some(path_start) = after_scheme.find('/') {
            return site[..scheme_end + 3 + path_start].to_string();
        }
    }
    site.to_string()
}
