//! Host extraction for content locators

use url::Url;

/// Extract the lowercase host of an absolute locator.
///
/// Returns `None` for unparseable or schemeless input and for locators
/// without a host (`mailto:`, `data:`).
pub fn host_of(locator: &str) -> Option<String> {
    let url = Url::parse(locator.trim()).ok()?;
    url_host(&url)
}

pub(crate) fn url_host(url: &Url) -> Option<String> {
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_ascii_lowercase)
}
