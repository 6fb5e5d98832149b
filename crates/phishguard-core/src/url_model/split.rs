//! Scheme and network-location splitting.

use std::net::Ipv6Addr;

use unicode_normalization::UnicodeNormalization;

/// Splits off a leading `scheme:` prefix and returns the remainder.
///
/// A scheme is recognised only when the first character is an ASCII letter
/// and every character up to the first `:` is an ASCII letter, digit, `+`,
/// `-` or `.`. Otherwise the whole input is returned unchanged.
pub fn split_scheme(url: &str) -> (Option<&str>, &str) {
    let Some(colon) = url.find(':') else {
        return (None, url);
    };
    if colon == 0 {
        return (None, url);
    }
    let candidate = &url[..colon];
    let starts_alpha = candidate
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());
    let all_scheme_chars = candidate
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if starts_alpha && all_scheme_chars {
        (Some(candidate), &url[colon + 1..])
    } else {
        (None, url)
    }
}

/// Returns the network location of a scheme-less remainder that starts with
/// `//`: everything after the slashes up to the first `/`, `?` or `#`.
///
/// `None` when the remainder does not start with `//`.
pub fn split_netloc(rest: &str) -> Option<&str> {
    let after = rest.strip_prefix("//")?;
    let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
    Some(&after[..end])
}

/// Checks bracket balance and, when a bracketed literal is present, that it is
/// an IPv6 address or a `v`-prefixed future literal with nothing but a port
/// after the closing bracket.
pub fn netloc_is_well_formed(netloc: &str) -> bool {
    let open = netloc.contains('[');
    let close = netloc.contains(']');
    if open != close {
        return false;
    }
    if !open {
        return true;
    }
    let host_and_port = netloc.rsplit_once('@').map_or(netloc, |(_, h)| h);
    let literal = match host_and_port.split_once('[') {
        Some((before, bracketed)) => {
            if !before.is_empty() {
                return false;
            }
            let (literal, port) = bracketed.split_once(']').unwrap_or((bracketed, ""));
            if !port.is_empty() && !port.starts_with(':') {
                return false;
            }
            literal
        }
        None => host_and_port
            .split_once(']')
            .map_or(host_and_port, |(literal, _)| literal),
    };
    is_bracketed_host(literal)
}

/// Rejects a non-ASCII network location whose NFKC form (with `@`, `:`, `#`
/// and `?` removed first) gains a `/`, `?`, `#`, `@` or `:`, e.g. a fullwidth
/// solidus or `℀`. ASCII input always passes.
pub fn netloc_survives_nfkc(netloc: &str) -> bool {
    if netloc.is_ascii() {
        return true;
    }
    let stripped: String = netloc
        .chars()
        .filter(|c| !matches!(c, '@' | ':' | '#' | '?'))
        .collect();
    let normalized: String = stripped.nfkc().collect();
    normalized == stripped || !normalized.contains(&['/', '?', '#', '@', ':'][..])
}

fn is_bracketed_host(literal: &str) -> bool {
    if let Some(future) = literal.strip_prefix('v') {
        return is_future_literal(future);
    }
    let address = match literal.split_once('%') {
        Some((address, zone)) if !zone.is_empty() => address,
        Some(_) => return false,
        None => literal,
    };
    address.parse::<Ipv6Addr>().is_ok()
}

/// `HEXDIG+ "." <anything>`
fn is_future_literal(body: &str) -> bool {
    let Some((version, rest)) = body.split_once('.') else {
        return false;
    };
    !version.is_empty() && version.chars().all(|c| c.is_ascii_hexdigit()) && !rest.is_empty()
}
