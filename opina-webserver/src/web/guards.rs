use std::net::IpAddr;

use rocket::request::{FromRequest, Outcome, Request};

use opina_core::gateways::OriginLookupGateway;

/// Best-effort submitter metadata taken from the incoming request.
///
/// Both fields are auxiliary: a request without them is served normally.
#[derive(Debug, Default)]
pub struct SubmitterInfo {
    pub address: Option<String>,
    pub descriptor: Option<String>,
}

impl SubmitterInfo {
    /// Falls back to the external lookup gateway when the request itself
    /// only reveals a local address, e.g. behind a misconfigured proxy.
    pub async fn resolve(
        self,
        lookup: &(dyn OriginLookupGateway + Send + Sync),
    ) -> (Option<String>, Option<String>) {
        let Self {
            address,
            descriptor,
        } = self;
        let address = match address {
            Some(addr) if !is_local(&addr) => Some(addr),
            _ => lookup.public_address().await,
        };
        (address, descriptor)
    }
}

fn is_local(address: &str) -> bool {
    address
        .parse::<IpAddr>()
        .map(|ip| ip.is_loopback() || ip.is_unspecified())
        .unwrap_or(false)
}

fn first_forwarded_address(header: &str) -> Option<String> {
    header
        .split(',')
        .map(str::trim)
        .find(|addr| !addr.is_empty())
        .map(ToOwned::to_owned)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SubmitterInfo {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        // Proxy headers take precedence over the socket address.
        let address = request
            .headers()
            .get_one("X-Forwarded-For")
            .and_then(first_forwarded_address)
            .or_else(|| {
                request
                    .headers()
                    .get_one("X-Real-IP")
                    .map(str::trim)
                    .filter(|addr| !addr.is_empty())
                    .map(ToOwned::to_owned)
            })
            .or_else(|| request.client_ip().map(|ip| ip.to_string()));
        let descriptor = request
            .headers()
            .get_one("User-Agent")
            .map(ToOwned::to_owned);
        Outcome::Success(Self {
            address,
            descriptor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_of_forwarded_chain() {
        assert_eq!(
            first_forwarded_address("203.0.113.7, 10.0.0.1"),
            Some("203.0.113.7".to_string())
        );
        assert_eq!(
            first_forwarded_address(" , 203.0.113.7"),
            Some("203.0.113.7".to_string())
        );
        assert_eq!(first_forwarded_address("  "), None);
    }

    #[test]
    fn local_addresses() {
        assert!(is_local("127.0.0.1"));
        assert!(is_local("::1"));
        assert!(is_local("0.0.0.0"));
        assert!(!is_local("203.0.113.7"));
        // Opaque strings pass through unchanged.
        assert!(!is_local("unknown"));
    }
}
