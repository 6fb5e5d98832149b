//! URL → feature vector.

use std::sync::OnceLock;

use regex::Regex;

use super::key::FeatureKey;
use super::value::FeatureValue;
use super::vector::FeatureVector;
use crate::url_model::host_component;

/// Known URL-shortener domains, matched as plain substrings of the whole URL.
pub const SHORTENING_SERVICES: [&str; 5] = ["bit.ly", "goo.gl", "tinyurl.com", "ow.ly", "t.co"];

/// URLs longer than this many characters are flagged as abnormal.
pub const ABNORMAL_LENGTH: usize = 75;

/// Characters skipped before looking for an embedded `//` (covers `http://`).
const SCHEME_PREFIX_CHARS: usize = 7;

fn dotted_quad() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("dotted-quad pattern is valid"))
}

/// Value used for a feature that is never computed from the URL.
fn placeholder(key: FeatureKey) -> FeatureValue {
    match key {
        // Assume the domain resolves.
        FeatureKey::DnsRecord => FeatureValue::Placeholder(1),
        _ => FeatureValue::Placeholder(0),
    }
}

/// Derives every feature from `url`.
///
/// Total over all strings: parts of the URL that cannot be found (no scheme,
/// no host, malformed brackets) fall back to an empty host, so host-based
/// features take their "absent" values instead of failing. Lengths and
/// positions are counted in characters, not bytes.
pub fn extract(url: &str) -> FeatureVector {
    let host = host_component(url);
    let length = url.chars().count();
    let is_https = url.starts_with("https://");

    let after_scheme = url
        .char_indices()
        .nth(SCHEME_PREFIX_CHARS)
        .map_or("", |(i, _)| &url[i..]);

    // Not clamped: a single-label host gives -1, an empty host gives -1 too.
    let sub_domains = host.split('.').count() as i64 - 2;

    let values = FeatureKey::ALL.map(|key| match key {
        FeatureKey::UrlLength => FeatureValue::Measured(length as i64),
        FeatureKey::HavingIpAddress => FeatureValue::flag(dotted_quad().is_match(&host)),
        FeatureKey::ShorteningService => {
            FeatureValue::flag(SHORTENING_SERVICES.iter().any(|s| url.contains(s)))
        }
        FeatureKey::HavingAtSymbol => FeatureValue::flag(url.contains('@')),
        FeatureKey::DoubleSlashRedirecting => FeatureValue::flag(after_scheme.contains("//")),
        FeatureKey::PrefixSuffix => FeatureValue::flag(host.contains('-')),
        FeatureKey::HavingSubDomain => FeatureValue::Measured(sub_domains),
        FeatureKey::SslFinalState | FeatureKey::HttpsToken => FeatureValue::flag(is_https),
        FeatureKey::SubmittingToEmail => FeatureValue::flag(url.contains("mailto:")),
        FeatureKey::AbnormalUrl => FeatureValue::flag(length > ABNORMAL_LENGTH),
        FeatureKey::Redirect => FeatureValue::flag(url.matches("//").count() > 1),
        FeatureKey::GoogleIndex => FeatureValue::flag(url.contains("google.com")),
        FeatureKey::DomainRegistrationLength
        | FeatureKey::Favicon
        | FeatureKey::RequestUrl
        | FeatureKey::UrlOfAnchor
        | FeatureKey::LinksInTags
        | FeatureKey::Sfh
        | FeatureKey::OnMouseover
        | FeatureKey::RightClick
        | FeatureKey::PopUpWindow
        | FeatureKey::Iframe
        | FeatureKey::AgeOfDomain
        | FeatureKey::DnsRecord
        | FeatureKey::WebTraffic
        | FeatureKey::PageRank
        | FeatureKey::LinksPointingToPage
        | FeatureKey::StatisticalReport
        | FeatureKey::Result
        | FeatureKey::Port => placeholder(key),
    });

    tracing::trace!(url, host = %host, length, "extracted features");
    FeatureVector::from_values(values)
}
