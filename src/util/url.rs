use thiserror::Error;
use url::Url;

/// Errors from validating a game URL before handing it to the OS opener.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Only web schemes are handed to the browser.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
}

/// Validate a URL before passing it to `open::that`.
///
/// The opener shells out to the platform handler, so only parseable
/// http/https URLs are allowed through. Localhost is fine — self-hosted
/// games are a normal case for a personal library.
pub fn validate_url_for_open(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }
}
