use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use opina_core::gateways::OriginLookupGateway;

const IP_ECHO_URL: &str = "https://api.ipify.org";

// Keep the page responsive when the echo service is slow.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Resolves the public address of this deployment by asking an
/// external echo service. Used when the submitter's address cannot be
/// determined from the request itself.
#[derive(Debug, Clone)]
pub struct IpEcho {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

impl Default for IpEcho {
    fn default() -> Self {
        Self::new(IP_ECHO_URL.to_string())
    }
}

impl IpEcho {
    pub fn new(url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            // Building a client without custom TLS settings does not fail.
            .unwrap_or_default();
        Self { client, url }
    }

    async fn lookup(&self) -> reqwest::Result<String> {
        let response: IpResponse = self
            .client
            .get(&self.url)
            .query(&[("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.ip)
    }
}

#[async_trait]
impl OriginLookupGateway for IpEcho {
    async fn public_address(&self) -> Option<String> {
        match self.lookup().await {
            Ok(ip) if !ip.is_empty() => Some(ip),
            Ok(_) => None,
            Err(err) => {
                // The address is auxiliary metadata, never fail a
                // submission over it.
                log::debug!("Public address lookup failed: {err}");
                None
            }
        }
    }
}

/// Used when external lookups are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOriginLookup;

#[async_trait]
impl OriginLookupGateway for NoOriginLookup {
    async fn public_address(&self) -> Option<String> {
        None
    }
}
