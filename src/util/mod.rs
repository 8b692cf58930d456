//! Shared helpers for the render layer.

mod text;
mod url;

pub use text::{display_width, truncate_to_width};
pub use url::{validate_url_for_open, UrlValidationError};
