//! RFC 3986-style decomposition of URI references.
//!
//! Parsing is lenient: it accepts anything that splits cleanly into
//! scheme, authority, path, query and fragment, and leaves the stricter
//! character rules to [`ParsedUri::is_well_formed`].

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::core::constants::{limits, schemes};
use crate::core::types::HostKind;

/// Structural decomposition of an absolute or relative URI reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUri {
    pub scheme: Option<String>,
    pub userinfo: Option<String>,
    pub host: String,
    pub host_kind: HostKind,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
    has_authority: bool,
    original: String,
}

impl ParsedUri {
    /// Parse an absolute or relative reference.
    ///
    /// Returns `None` for text that cannot be a URI at all: empty input,
    /// whitespace or control characters, characters that are never legal
    /// in a URI, or an authority whose port, IP literal or host does not
    /// parse. Hosts of transport schemes must be DNS-shaped.
    pub fn parse(input: &str) -> Option<Self> {
        if input.is_empty() || input.chars().any(is_forbidden) {
            return None;
        }

        let (scheme, rest) = split_scheme(input);
        let (authority, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(['/', '?', '#']).unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        let (rest, fragment) = match rest.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment.to_string())),
            None => (rest, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        let (userinfo, host, host_kind, port) = match authority {
            Some(authority) => parse_authority(authority)?,
            None => (None, String::new(), HostKind::Unknown, None),
        };

        if host_kind == HostKind::DomainName
            && scheme.is_some_and(schemes::is_transport)
            && !host.chars().all(is_dns_host_char)
        {
            return None;
        }

        Some(Self {
            scheme: scheme.map(str::to_string),
            userinfo,
            host,
            host_kind,
            port,
            path: path.to_string(),
            query,
            fragment,
            has_authority: authority.is_some(),
            original: input.to_string(),
        })
    }

    /// Parse, keeping only absolute references.
    pub fn parse_absolute(input: &str) -> Option<Self> {
        Self::parse(input).filter(Self::is_absolute)
    }

    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// True when the authority names a usable host.
    pub fn has_host(&self) -> bool {
        !self.host.is_empty() && self.host_kind != HostKind::Unknown
    }

    /// The text this reference was parsed from.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn scheme_lowercase(&self) -> String {
        self.scheme
            .as_deref()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default()
    }

    pub fn is_loopback(&self) -> bool {
        match self.host_kind {
            HostKind::IPv4 => self
                .host
                .parse::<Ipv4Addr>()
                .is_ok_and(|ip| ip.is_loopback()),
            HostKind::IPv6 => self
                .host
                .trim_start_matches('[')
                .trim_end_matches(']')
                .parse::<Ipv6Addr>()
                .is_ok_and(|ip| ip.is_loopback()),
            HostKind::DomainName => self.host.eq_ignore_ascii_case("localhost"),
            HostKind::Unknown => false,
        }
    }

    /// Copy of this URI with a different host of the same kind.
    pub fn with_host(&self, host: String) -> Self {
        Self {
            host,
            ..self.clone()
        }
    }

    /// Final admissibility check for an absolute URI.
    ///
    /// The scheme must be syntactically valid, the host must be a non-empty
    /// IP literal or a domain without empty or oversized labels, and every
    /// other component may only contain characters allowed by RFC 3986
    /// (plus non-ASCII characters, as in RFC 3987).
    pub fn is_well_formed(&self) -> bool {
        let Some(scheme) = self.scheme.as_deref() else {
            return false;
        };

        check_scheme_name(scheme)
            && self.has_authority
            && check_host_name(&self.host, self.host_kind)
            && self
                .userinfo
                .as_deref()
                .is_none_or(|userinfo| check_component(userinfo, is_userinfo_char))
            && check_component(&self.path, is_path_char)
            && self
                .query
                .as_deref()
                .is_none_or(|query| check_component(query, is_query_char))
            && self
                .fragment
                .as_deref()
                .is_none_or(|fragment| check_component(fragment, is_query_char))
    }

    /// Canonical string form.
    ///
    /// Scheme and host are lowercased, a port equal to the scheme's default
    /// is dropped, and an empty path after an authority becomes `/`.
    pub fn to_canonical_string(&self) -> String {
        let mut out = String::with_capacity(self.original.len() + 1);
        let scheme = self.scheme_lowercase();

        if self.scheme.is_some() {
            out.push_str(&scheme);
            out.push(':');
        }

        if self.has_authority {
            out.push_str("//");
            if let Some(userinfo) = &self.userinfo {
                out.push_str(userinfo);
                out.push('@');
            }
            out.push_str(&self.host.to_lowercase());
            if let Some(port) = self.port
                && schemes::default_port(&scheme) != Some(port)
            {
                out.push(':');
                out.push_str(&port.to_string());
            }
            if self.path.is_empty() {
                out.push('/');
            }
        }

        out.push_str(&self.path);
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }

        out
    }
}

impl fmt::Display for ParsedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

/// Characters that can never be part of a URI, even leniently.
fn is_forbidden(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '\\' | '^' | '`')
}

fn split_scheme(input: &str) -> (Option<&str>, &str) {
    match input.split_once(':') {
        Some((scheme, rest)) if check_scheme_name(scheme) => (Some(scheme), rest),
        _ => (None, input),
    }
}

type Authority = (Option<String>, String, HostKind, Option<u16>);

fn parse_authority(authority: &str) -> Option<Authority> {
    let (userinfo, hostport) = match authority.rsplit_once('@') {
        Some((userinfo, hostport)) => (Some(userinfo.to_string()), hostport),
        None => (None, authority),
    };

    let (host, port) = if hostport.starts_with('[') {
        let close = hostport.find(']')?;
        let (literal, rest) = hostport.split_at(close + 1);
        let port = match rest {
            "" => "",
            _ => rest.strip_prefix(':')?,
        };
        (literal, port)
    } else {
        match hostport.rsplit_once(':') {
            Some((host, port)) => (host, port),
            None => (hostport, ""),
        }
    };

    let port = match port {
        "" => None,
        digits if digits.bytes().all(|b| b.is_ascii_digit()) => Some(digits.parse::<u16>().ok()?),
        _ => return None,
    };

    let host_kind = classify_host(host)?;
    Some((userinfo, host.to_string(), host_kind, port))
}

/// Classify a host, or `None` when it is neither an IP literal nor a
/// registered name.
fn classify_host(host: &str) -> Option<HostKind> {
    if host.is_empty() {
        return Some(HostKind::Unknown);
    }
    if let Some(inner) = host.strip_prefix('[') {
        let inner = inner.strip_suffix(']')?;
        return inner.parse::<Ipv6Addr>().ok().map(|_| HostKind::IPv6);
    }
    if host.parse::<Ipv4Addr>().is_ok() {
        return Some(HostKind::IPv4);
    }
    host.chars().all(is_reg_name_char).then_some(HostKind::DomainName)
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn check_scheme_name(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Host syntax: IP literals pass, domains need non-empty labels of at most
/// 63 octets made of ASCII letters, digits, `-`, `_` or non-ASCII characters.
pub fn check_host_name(host: &str, kind: HostKind) -> bool {
    match kind {
        HostKind::IPv4 | HostKind::IPv6 => true,
        HostKind::Unknown => false,
        HostKind::DomainName => host.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= limits::MAX_LABEL_LENGTH
                && label
                    .chars()
                    .all(|c| !c.is_ascii() || c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        }),
    }
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

fn is_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

fn is_reg_name_char(c: char) -> bool {
    !c.is_ascii() || is_unreserved(c) || is_sub_delim(c) || c == '%'
}

fn is_dns_host_char(c: char) -> bool {
    !c.is_ascii() || c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')
}

fn is_userinfo_char(c: char) -> bool {
    is_unreserved(c) || is_sub_delim(c) || c == ':'
}

fn is_path_char(c: char) -> bool {
    is_unreserved(c) || is_sub_delim(c) || matches!(c, ':' | '@' | '/')
}

fn is_query_char(c: char) -> bool {
    is_path_char(c) || c == '?'
}

/// Check a component character by character; `%` must start a valid escape
/// and non-ASCII characters are accepted.
fn check_component(component: &str, allowed: fn(char) -> bool) -> bool {
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            let escape_ok = chars.next().is_some_and(|h| h.is_ascii_hexdigit())
                && chars.next().is_some_and(|h| h.is_ascii_hexdigit());
            if !escape_ok {
                return false;
            }
        } else if c.is_ascii() && !allowed(c) {
            return false;
        }
    }
    true
}
