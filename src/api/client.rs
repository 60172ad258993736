use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    /// Looks up the record named `domain` in the zone. `None` when no
    /// record matches.
    async fn find_record(&self, zone_id: &str, domain: &str) -> Result<Option<DnsRecord>>;

    /// Points the A record at `ip` and returns the raw response body.
    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        domain: &str,
        ip: &str,
    ) -> Result<String>;
}
