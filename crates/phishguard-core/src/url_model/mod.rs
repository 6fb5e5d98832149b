//! URL splitting for feature extraction.
//!
//! Only the pieces the extractor needs are modelled: the scheme prefix and the
//! raw network location ("host component"). The host component keeps any
//! userinfo and port (`user@host:8080`), because that is the string the
//! classifier's host-based features were trained on. Nothing here fails: input
//! that cannot be split yields an empty host.

mod sanitize;
mod split;

pub use sanitize::strip_unsafe_chars;
pub use split::{netloc_is_well_formed, netloc_survives_nfkc, split_netloc, split_scheme};

/// Returns the network location of `url`, or an empty string when the URL has
/// none or it is malformed (unbalanced brackets, a bad bracketed literal, or
/// characters that turn into delimiters under NFKC).
///
/// # Examples
///
/// - `host_component("https://a.example.com/login")` → `"a.example.com"`
/// - `host_component("//cdn.example.com/x")` → `"cdn.example.com"`
/// - `host_component("example.com/path")` → `""`
pub fn host_component(url: &str) -> String {
    let cleaned = strip_unsafe_chars(url);
    let (_, rest) = split_scheme(&cleaned);
    match split_netloc(rest) {
        Some(netloc) if netloc_is_well_formed(netloc) && netloc_survives_nfkc(netloc) => {
            netloc.to_string()
        }
        Some(netloc) => {
            tracing::trace!(netloc, "malformed network location, using empty host");
            String::new()
        }
        None => String::new(),
    }
}
