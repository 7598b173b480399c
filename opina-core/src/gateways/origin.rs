use async_trait::async_trait;

/// Best-effort lookup of the submitting client's public network address.
///
/// Implementations must fail silently and quickly; the submission flow
/// never depends on a result.
#[async_trait]
pub trait OriginLookupGateway {
    async fn public_address(&self) -> Option<String>;
}
