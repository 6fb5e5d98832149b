//! Feature names.

use std::fmt;
use std::str::FromStr;

/// One named feature. Declaration order is the canonical vector order.
///
/// The string names are the column names of the trained model and must not
/// change, including their historical misspellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKey {
    UrlLength,
    HavingIpAddress,
    ShorteningService,
    HavingAtSymbol,
    DoubleSlashRedirecting,
    PrefixSuffix,
    HavingSubDomain,
    SslFinalState,
    HttpsToken,
    DomainRegistrationLength,
    Favicon,
    RequestUrl,
    UrlOfAnchor,
    LinksInTags,
    Sfh,
    SubmittingToEmail,
    AbnormalUrl,
    Redirect,
    OnMouseover,
    RightClick,
    PopUpWindow,
    Iframe,
    AgeOfDomain,
    DnsRecord,
    WebTraffic,
    PageRank,
    GoogleIndex,
    LinksPointingToPage,
    StatisticalReport,
    Result,
    Port,
}

impl FeatureKey {
    pub const COUNT: usize = 31;

    pub const ALL: [FeatureKey; Self::COUNT] = [
        FeatureKey::UrlLength,
        FeatureKey::HavingIpAddress,
        FeatureKey::ShorteningService,
        FeatureKey::HavingAtSymbol,
        FeatureKey::DoubleSlashRedirecting,
        FeatureKey::PrefixSuffix,
        FeatureKey::HavingSubDomain,
        FeatureKey::SslFinalState,
        FeatureKey::HttpsToken,
        FeatureKey::DomainRegistrationLength,
        FeatureKey::Favicon,
        FeatureKey::RequestUrl,
        FeatureKey::UrlOfAnchor,
        FeatureKey::LinksInTags,
        FeatureKey::Sfh,
        FeatureKey::SubmittingToEmail,
        FeatureKey::AbnormalUrl,
        FeatureKey::Redirect,
        FeatureKey::OnMouseover,
        FeatureKey::RightClick,
        FeatureKey::PopUpWindow,
        FeatureKey::Iframe,
        FeatureKey::AgeOfDomain,
        FeatureKey::DnsRecord,
        FeatureKey::WebTraffic,
        FeatureKey::PageRank,
        FeatureKey::GoogleIndex,
        FeatureKey::LinksPointingToPage,
        FeatureKey::StatisticalReport,
        FeatureKey::Result,
        FeatureKey::Port,
    ];

    /// Model column name.
    pub fn name(self) -> &'static str {
        match self {
            FeatureKey::UrlLength => "URL_Length",
            FeatureKey::HavingIpAddress => "having_IP_Address",
            FeatureKey::ShorteningService => "Shortining_Service",
            FeatureKey::HavingAtSymbol => "having_At_Symbol",
            FeatureKey::DoubleSlashRedirecting => "double_slash_redirecting",
            FeatureKey::PrefixSuffix => "Prefix_Suffix",
            FeatureKey::HavingSubDomain => "having_Sub_Domain",
            FeatureKey::SslFinalState => "SSLfinal_State",
            FeatureKey::HttpsToken => "HTTPS_token",
            FeatureKey::DomainRegistrationLength => "Domain_registeration_length",
            FeatureKey::Favicon => "Favicon",
            FeatureKey::RequestUrl => "Request_URL",
            FeatureKey::UrlOfAnchor => "URL_of_Anchor",
            FeatureKey::LinksInTags => "Links_in_tags",
            FeatureKey::Sfh => "SFH",
            FeatureKey::SubmittingToEmail => "Submitting_to_email",
            FeatureKey::AbnormalUrl => "Abnormal_URL",
            FeatureKey::Redirect => "Redirect",
            FeatureKey::OnMouseover => "on_mouseover",
            FeatureKey::RightClick => "RightClick",
            FeatureKey::PopUpWindow => "popUpWidnow",
            FeatureKey::Iframe => "Iframe",
            FeatureKey::AgeOfDomain => "age_of_domain",
            FeatureKey::DnsRecord => "DNSRecord",
            FeatureKey::WebTraffic => "web_traffic",
            FeatureKey::PageRank => "Page_Rank",
            FeatureKey::GoogleIndex => "Google_Index",
            FeatureKey::LinksPointingToPage => "Links_pointing_to_page",
            FeatureKey::StatisticalReport => "Statistical_report",
            FeatureKey::Result => "Result",
            FeatureKey::Port => "port",
        }
    }

    /// Position in canonical order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not one of the extractor's feature keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature name: {0}")]
pub struct UnknownFeature(pub String);

impl FromStr for FeatureKey {
    type Err = UnknownFeature;

    /// Exact, case-sensitive match on the model column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureKey::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}
