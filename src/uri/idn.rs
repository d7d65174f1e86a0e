//! Punycode round trip for internationalized host names (UTS 46).

use log::trace;

use crate::core::types::HostKind;
use crate::uri::parser::ParsedUri;

/// ASCII-compatible form of a domain, or `None` if it holds code points
/// that are not allowed in a host name.
pub fn to_ascii(domain: &str) -> Option<String> {
    match idna::domain_to_ascii(domain) {
        Ok(ascii) => Some(ascii),
        Err(e) => {
            trace!("Rejecting host {domain:?}: {e:?}");
            None
        }
    }
}

/// Human-readable form of a domain. Labels that fail to decode are
/// returned as they were.
pub fn to_unicode(domain: &str) -> String {
    let (unicode, outcome) = idna::domain_to_unicode(domain);
    match outcome {
        Ok(()) => unicode,
        Err(_) => domain.to_string(),
    }
}

/// Replace a domain host with its punycode form. IP literals are left as is.
pub fn encode_host(uri: &ParsedUri) -> Option<ParsedUri> {
    match uri.host_kind {
        HostKind::DomainName => to_ascii(&uri.host).map(|host| uri.with_host(host)),
        _ => Some(uri.clone()),
    }
}

/// Replace a domain host with its Unicode form. IP literals are left as is.
pub fn decode_host(uri: &ParsedUri) -> ParsedUri {
    match uri.host_kind {
        HostKind::DomainName => uri.with_host(to_unicode(&uri.host)),
        _ => uri.clone(),
    }
}
